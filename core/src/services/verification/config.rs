//! Configuration for the verification service

use std::time::Duration;

use shelf_shared::VerificationConfig;

use crate::domain::entities::verification_code::default_expiration;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Lifetime of an issued code, enforced by the cache TTL
    pub code_ttl: Duration,
    /// Upper bound on each cache call
    pub cache_timeout: Duration,
    /// Upper bound on waiting for a send to finish
    pub notify_timeout: Duration,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl: default_expiration(),
            cache_timeout: Duration::from_secs(5),
            notify_timeout: Duration::from_secs(30),
        }
    }
}

impl From<&VerificationConfig> for VerificationServiceConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            code_ttl: config.code_ttl(),
            cache_timeout: config.cache_timeout(),
            notify_timeout: config.notify_timeout(),
        }
    }
}
