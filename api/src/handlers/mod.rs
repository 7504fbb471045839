//! Request handling helpers shared by all routes

pub mod error;

pub use error::ApiError;

use validator::Validate;

/// Run the request's `validator` rules, mapping failures to a 400
pub fn validate_request<T: Validate>(request: &T) -> Result<(), ApiError> {
    request.validate().map_err(ApiError::from)
}
