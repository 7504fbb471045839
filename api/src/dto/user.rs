//! Account request and response bodies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use shelf_core::domain::entities::user::{ProfileUpdate, User};

/// `?email=` query used by the lookup and send-code endpoints
///
/// A missing parameter binds as an empty string so it is reported the same
/// way as a blank one.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EmailQuery {
    #[serde(default)]
    pub email: String,
}

/// Body of `PUT /users/update`
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct UpdateUserRequest {
    pub id: i64,

    #[validate(email(message = "invalid email address"))]
    pub email: String,

    #[validate(length(equal = 11, message = "phone must be 11 characters"))]
    pub phone: String,

    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,
}

impl From<UpdateUserRequest> for ProfileUpdate {
    fn from(request: UpdateUserRequest) -> Self {
        ProfileUpdate {
            id: request.id,
            email: request.email,
            phone: request.phone,
            address: request.address,
        }
    }
}

/// Body of `PUT /users/update/password`
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct UpdatePasswordRequest {
    pub id: i64,

    #[validate(length(min = 8, message = "Password must be minimum of 8 characters"))]
    pub password: String,
}

/// Body of `DELETE /users/deactivate`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeactivateRequest {
    pub id: i64,
}

/// Public view of an account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub lastname: String,
    pub firstname: String,
    pub phone: String,
    pub address: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            lastname: user.lastname,
            firstname: user.firstname,
            phone: user.phone,
            address: user.address,
            email: user.email,
            is_admin: user.is_admin,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
