//! Profile and password updates

use actix_web::{web, HttpResponse};

use shelf_core::repositories::UserRepository;
use shelf_core::services::verification::{CodeCacheTrait, NotifierTrait};
use shelf_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::{UpdatePasswordRequest, UpdateUserRequest, UserResponse};
use crate::handlers::{validate_request, ApiError};
use crate::middleware::AuthContext;

/// `PUT /users/update`: change email, phone and address of the caller's account
///
/// Answers 202 with the updated user, 401 when `id` is not the caller's and
/// 409 when the email belongs to another account.
pub async fn update_user<U, C, N>(
    state: web::Data<AppState<U, C, N>>,
    auth: AuthContext,
    request: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    C: CodeCacheTrait + 'static,
    N: NotifierTrait + ?Sized + 'static,
{
    validate_request(&*request)?;

    let user = state
        .user_service
        .update_profile(auth.user_id, request.into_inner().into())
        .await?;

    Ok(HttpResponse::Accepted().json(ApiResponse::success(
        202,
        "user updated successfully",
        UserResponse::from(user),
    )))
}

/// `PUT /users/update/password`
pub async fn update_password<U, C, N>(
    state: web::Data<AppState<U, C, N>>,
    auth: AuthContext,
    request: web::Json<UpdatePasswordRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    C: CodeCacheTrait + 'static,
    N: NotifierTrait + ?Sized + 'static,
{
    validate_request(&*request)?;

    state
        .user_service
        .update_password(auth.user_id, request.id, &request.password)
        .await?;

    Ok(HttpResponse::Accepted().json(ApiResponse::message(202, "password updated successfully")))
}
