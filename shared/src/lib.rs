//! Shared utilities and common types for the Shelf server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - API response envelopes
//! - Utility functions (email normalization, log masking, password policy)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, DatabaseConfig, Environment, LoggingConfig, MailConfig,
    ServerConfig, VerificationConfig,
};
pub use types::{ApiResponse, Pagination, ResponseStatus};
pub use utils::validation;
