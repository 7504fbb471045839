//! One-time verification codes delivered by email.

use rand::Rng;
use std::time::Duration;

/// Length of the verification code
pub const CODE_LENGTH: usize = 4;

/// Default lifetime of a verification code (10 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: u64 = 10;

const CODE_MIN: u32 = 1000;
const CODE_MAX: u32 = 9999;

/// Generates a random 4-digit verification code
///
/// Drawn uniformly from `1000..=9999` with the thread-local CSPRNG and
/// rendered zero-padded, so every value is exactly `CODE_LENGTH` digits.
pub fn generate_code() -> String {
    let code: u32 = rand::thread_rng().gen_range(CODE_MIN..=CODE_MAX);
    format!("{:04}", code)
}

/// A code issued to one subject
///
/// Lives only as long as an issuance call; the cache is the sole store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneTimeCode {
    /// Account id the code belongs to
    pub subject_id: i64,

    /// Four ASCII digits
    pub value: String,

    /// Lifetime enforced by the cache TTL
    pub expires_after: Duration,
}

impl OneTimeCode {
    /// Issue a fresh code for `subject_id`
    pub fn issue(subject_id: i64, expires_after: Duration) -> Self {
        Self {
            subject_id,
            value: generate_code(),
            expires_after,
        }
    }

    /// Cache key under which the code is stored
    pub fn cache_key(&self) -> String {
        cache_key(self.subject_id)
    }
}

/// Cache key for a subject: its decimal id
pub fn cache_key(subject_id: i64) -> String {
    subject_id.to_string()
}

/// Default code lifetime as a `Duration`
pub fn default_expiration() -> Duration {
    Duration::from_secs(DEFAULT_EXPIRATION_MINUTES * 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_format() {
        for _ in 0..500 {
            let code = generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));

            let num: u32 = code.parse().expect("Generated code should be a valid number");
            assert!((CODE_MIN..=CODE_MAX).contains(&num));
        }
    }

    #[test]
    fn test_code_uniqueness() {
        let codes: HashSet<String> = (0..100).map(|_| generate_code()).collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_issue_uses_decimal_key() {
        let code = OneTimeCode::issue(42, default_expiration());
        assert_eq!(code.cache_key(), "42");
        assert_eq!(code.expires_after, Duration::from_secs(600));
        assert_eq!(code.value.len(), CODE_LENGTH);
    }
}
