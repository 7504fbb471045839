//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Bearer token verification
//! - `cache` - Redis connection used by the verification code cache
//! - `database` - PostgreSQL connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `mail` - SMTP relay and verification email content
//! - `server` - HTTP server binding
//! - `verification` - Code lifetime and per-call timeouts

pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod mail;
pub mod server;
pub mod verification;

use serde::{Deserialize, Serialize};

pub use auth::AuthConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use mail::{MailConfig, MailProvider};
pub use server::ServerConfig;
pub use verification::VerificationConfig;

/// Complete application configuration combining all sub-configurations
///
/// Every section falls back to its defaults, so a partial configuration file
/// (or none at all) still produces a usable development setup.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Redis cache configuration
    pub cache: CacheConfig,

    /// Mail relay configuration
    pub mail: MailConfig,

    /// Token verification configuration
    pub auth: AuthConfig,

    /// Verification code configuration
    pub verification: VerificationConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            logging: LoggingConfig::for_environment(Environment::Development),
            ..Default::default()
        }
    }

    /// Create configuration for production environment
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig::new("0.0.0.0", 8080),
            database: DatabaseConfig::default().with_max_connections(50),
            mail: MailConfig {
                provider: MailProvider::Smtp,
                ..Default::default()
            },
            logging: LoggingConfig::for_environment(Environment::Production),
            ..Default::default()
        }
    }

    /// Defaults appropriate for the given environment
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self::development(),
            Environment::Production => Self::production(),
            Environment::Staging => Self {
                environment: Environment::Staging,
                logging: LoggingConfig::for_environment(Environment::Staging),
                ..Self::development()
            },
        }
    }
}
