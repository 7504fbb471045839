//! Verification service module for email-based one-time codes
//!
//! This module provides the complete code workflow:
//! - Resolving an email address to an account
//! - Generating and storing a 4-digit code with a TTL
//! - Sending the code and waiting for the delivery result
//! - Redeeming a code exactly once

mod config;
pub mod mock;
mod service;
mod traits;
mod types;


pub use config::VerificationServiceConfig;
pub use service::VerificationService;
pub use traits::{CodeCacheTrait, NotifierTrait};
pub use types::VerificationOutcome;
