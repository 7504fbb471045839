//! Verify code endpoint handler

use actix_web::{web, HttpResponse};

use shelf_core::repositories::UserRepository;
use shelf_core::services::verification::{CodeCacheTrait, NotifierTrait};
use shelf_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::VerifyCodeRequest;
use crate::handlers::{validate_request, ApiError};

/// Redeem a previously issued code
///
/// # Endpoint
/// `POST /users/verify_code` with `{"user_id": 7, "code": "0427"}`
///
/// # Responses
/// - 200 OK: code matched and was consumed
/// - 400 Bad Request: malformed body
/// - 401 Unauthorized: code differs from the stored one
/// - 404 Not Found: no outstanding code
/// - 500 Internal Server Error: cache unreachable
pub async fn verify_code<U, C, N>(
    state: web::Data<AppState<U, C, N>>,
    request: web::Json<VerifyCodeRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    C: CodeCacheTrait + 'static,
    N: NotifierTrait + ?Sized + 'static,
{
    validate_request(&*request)?;

    state
        .verification_service
        .verify_code(request.user_id, &request.code)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message(200, "code verification successful")))
}
