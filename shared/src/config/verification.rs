//! Verification code configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lifetime of issued codes and bounds on the calls made while issuing them
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Code lifetime in seconds, enforced by the cache TTL
    pub code_ttl_secs: u64,

    /// Upper bound on a single cache read or write, in seconds
    pub cache_timeout_secs: u64,

    /// Upper bound on waiting for the notifier, in seconds
    pub notify_timeout_secs: u64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_secs: 600,
            cache_timeout_secs: 5,
            notify_timeout_secs: 30,
        }
    }
}

impl VerificationConfig {
    pub fn code_ttl(&self) -> Duration {
        Duration::from_secs(self.code_ttl_secs)
    }

    pub fn cache_timeout(&self) -> Duration {
        Duration::from_secs(self.cache_timeout_secs)
    }

    pub fn notify_timeout(&self) -> Duration {
        Duration::from_secs(self.notify_timeout_secs)
    }
}
