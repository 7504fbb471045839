//! Send code endpoint handler

use actix_web::{web, HttpResponse};

use shelf_core::repositories::UserRepository;
use shelf_core::services::verification::{CodeCacheTrait, NotifierTrait};
use shelf_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::{EmailQuery, SendCodeResponse};
use crate::handlers::ApiError;

/// Issue a verification code to the account registered under `?email=`
///
/// # Endpoint
/// `GET /users/send_code_to_user?email=jane@example.com`
///
/// # Responses
/// - 200 OK: code stored; `anyError` carries the delivery error, if any
/// - 404 Not Found: empty email or no such account
/// - 500 Internal Server Error: code could not be stored
pub async fn send_code<U, C, N>(
    state: web::Data<AppState<U, C, N>>,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    C: CodeCacheTrait + 'static,
    N: NotifierTrait + ?Sized + 'static,
{
    let outcome = state.verification_service.issue_code(&query.email).await?;
    let delivery_error = outcome.delivery_error.clone();

    Ok(HttpResponse::Ok().json(
        ApiResponse::success(
            200,
            "code sent to user successfully",
            SendCodeResponse::from(outcome),
        )
        .with_any_error(delivery_error),
    ))
}
