//! Admin user listing

use actix_web::{web, HttpResponse};

use shelf_core::repositories::UserRepository;
use shelf_core::services::verification::{CodeCacheTrait, NotifierTrait};
use shelf_shared::{ApiResponse, Pagination};

use crate::app::AppState;
use crate::dto::UserResponse;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// `GET /users/allUsers?limit=&offset=`, administrators only
pub async fn list_users<U, C, N>(
    state: web::Data<AppState<U, C, N>>,
    auth: AuthContext,
    query: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    C: CodeCacheTrait + 'static,
    N: NotifierTrait + ?Sized + 'static,
{
    let page = query.into_inner().validate();

    let users: Vec<UserResponse> = state
        .user_service
        .list_users(&auth.identity(), page.limit, page.offset)
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        200,
        "all users fetched successfully",
        users,
    )))
}
