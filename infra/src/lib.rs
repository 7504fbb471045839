//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `shelf_core`:
//!
//! - **Database**: PostgreSQL user repository using SQLx
//! - **Cache**: Redis client backing the verification code cache
//! - **Mail**: SMTP notifier (lettre) and a logging notifier for development

/// Database module - PostgreSQL implementations using SQLx
pub mod database;

/// Cache module - Redis client and verification code store
pub mod cache;

/// Mail module - verification code delivery
pub mod mail;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Mail composition or delivery error
    #[error("Mail error: {0}")]
    Mail(String),

    /// Template or other file access error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<lettre::transport::smtp::Error> for InfrastructureError {
    fn from(e: lettre::transport::smtp::Error) -> Self {
        InfrastructureError::Mail(e.to_string())
    }
}

impl From<lettre::address::AddressError> for InfrastructureError {
    fn from(e: lettre::address::AddressError) -> Self {
        InfrastructureError::Mail(format!("invalid address: {}", e))
    }
}

impl From<lettre::error::Error> for InfrastructureError {
    fn from(e: lettre::error::Error) -> Self {
        InfrastructureError::Mail(format!("invalid message: {}", e))
    }
}
