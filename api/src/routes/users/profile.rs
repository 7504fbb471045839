//! Account lookups

use actix_web::{web, HttpResponse};

use shelf_core::repositories::UserRepository;
use shelf_core::services::verification::{CodeCacheTrait, NotifierTrait};
use shelf_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::{EmailQuery, UserResponse};
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// `GET /users/profile`: the caller's own account
pub async fn profile<U, C, N>(
    state: web::Data<AppState<U, C, N>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    C: CodeCacheTrait + 'static,
    N: NotifierTrait + ?Sized + 'static,
{
    let user = state.user_service.profile(auth.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        200,
        "user fetched successfully",
        UserResponse::from(user),
    )))
}

/// `GET /users/get_email?email=`
pub async fn get_email<U, C, N>(
    state: web::Data<AppState<U, C, N>>,
    _auth: AuthContext,
    query: web::Query<EmailQuery>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    C: CodeCacheTrait + 'static,
    N: NotifierTrait + ?Sized + 'static,
{
    let user = state.user_service.find_by_email(&query.email).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        200,
        "user retrieved successfully",
        UserResponse::from(user),
    )))
}
