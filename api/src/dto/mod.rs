//! Data transfer objects for the `/users` endpoints

pub mod user;
pub mod verification;

pub use user::{DeactivateRequest, EmailQuery, UpdatePasswordRequest, UpdateUserRequest, UserResponse};
pub use verification::{SendCodeResponse, VerifyCodeRequest};
