//! Traits for the cache and notifier the verification service depends on

use async_trait::async_trait;
use std::time::Duration;

/// Key/value store holding at most one outstanding code per subject
#[async_trait]
pub trait CodeCacheTrait: Send + Sync {
    /// Store `value` under `key`, replacing any previous value, expiring after `ttl`
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), String>;
    /// Fetch the value under `key`; `None` when absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>, String>;
    /// Remove `key`; `true` when something was deleted
    async fn delete(&self, key: &str) -> Result<bool, String>;
}

/// Delivers a code to an email address
#[async_trait]
pub trait NotifierTrait: Send + Sync {
    /// Send a verification code; the error string is opaque and only logged or echoed
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<(), String>;
}
