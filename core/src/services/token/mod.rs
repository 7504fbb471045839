//! Bearer token verification
//!
//! Tokens are issued elsewhere; this service only turns a token into the
//! caller's identity.

mod verifier;

pub use verifier::{JwtTokenVerifier, TokenVerifier};
