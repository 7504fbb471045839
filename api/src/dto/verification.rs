use serde::{Deserialize, Serialize};
use validator::Validate;

use shelf_core::services::verification::VerificationOutcome;

/// Body of `POST /users/verify_code`
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(range(min = 1, message = "user_id is required"))]
    pub user_id: i64,

    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
}

/// Payload of a successful `GET /users/send_code_to_user`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SendCodeResponse {
    pub user_id: i64,
    pub generated_code: String,
    /// Code lifetime in whole seconds
    pub expires_at: u64,
    pub email: String,
}

impl From<VerificationOutcome> for SendCodeResponse {
    fn from(outcome: VerificationOutcome) -> Self {
        Self {
            user_id: outcome.subject_id,
            generated_code: outcome.code,
            expires_at: outcome.ttl.as_secs(),
            email: outcome.email,
        }
    }
}
