//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

/// Bearer token verification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HMAC secret used to verify HS256 tokens
    pub secret: String,

    /// Allowed clock skew in seconds when checking `exp`
    pub leeway_secs: u64,

    /// Role claim value that grants administrator access
    pub admin_role: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            leeway_secs: 30,
            admin_role: String::from("admin"),
        }
    }
}

impl AuthConfig {
    /// Create a new configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}
