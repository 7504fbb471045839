//! Password policy enforcement and bcrypt hashing

use shelf_shared::utils::validation::check_password_strength;

use crate::errors::{DomainError, DomainResult};

/// Validate `password` against the policy and hash it with bcrypt
///
/// Hashing runs on the blocking pool since bcrypt is deliberately slow.
pub async fn hash_password(password: &str, cost: u32) -> DomainResult<String> {
    check_password_strength(password).map_err(|failures| DomainError::Validation {
        message: failures.join("; "),
    })?;

    let password = password.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Password hashing task failed: {}", e),
        })?
        .map_err(|e| DomainError::Internal {
            message: format!("Failed to hash password: {}", e),
        })
}

/// Check `password` against a stored bcrypt hash
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}
