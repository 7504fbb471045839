//! Account deactivation

use actix_web::{web, HttpResponse};

use shelf_core::repositories::UserRepository;
use shelf_core::services::verification::{CodeCacheTrait, NotifierTrait};
use shelf_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::DeactivateRequest;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// `DELETE /users/deactivate` with `{"id": 7}`; the id must be the caller's
pub async fn deactivate<U, C, N>(
    state: web::Data<AppState<U, C, N>>,
    auth: AuthContext,
    request: web::Json<DeactivateRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    C: CodeCacheTrait + 'static,
    N: NotifierTrait + ?Sized + 'static,
{
    state
        .user_service
        .deactivate(auth.user_id, request.id)
        .await?;

    Ok(HttpResponse::Accepted().json(ApiResponse::message(202, "user deactivated successfully")))
}
