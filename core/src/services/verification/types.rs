//! Types for verification service results

use std::time::Duration;

/// Result of issuing a code
///
/// Issuance succeeds once the code is stored; a failed delivery is carried
/// in `delivery_error` rather than failing the whole call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationOutcome {
    /// Account the code was issued to
    pub subject_id: i64,
    /// The issued code
    pub code: String,
    /// How long the code stays redeemable
    pub ttl: Duration,
    /// Address the code was sent to
    pub email: String,
    /// `None` when the notifier reported success
    pub delivery_error: Option<String>,
}

impl VerificationOutcome {
    pub fn is_delivered(&self) -> bool {
        self.delivery_error.is_none()
    }
}
