//! Token verification errors
//!
//! Kept separate from `DomainError` so the verifier can report precise causes
//! while the HTTP layer collapses all of them into a single 401.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Missing claim: {claim}")]
    MissingClaim { claim: String },
}
