//! Verification code store backed by Redis
//!
//! One key per account holds the outstanding code. Keys are the account id,
//! prefixed with `key_prefix` when one is configured. Expiry is delegated to
//! Redis (`SET ... EX`), so an expired code is simply absent.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use shelf_core::services::verification::CodeCacheTrait;
use shelf_shared::CacheConfig;

use crate::cache::RedisClient;
use crate::InfrastructureError;

/// Redis implementation of the verification code cache
#[derive(Clone)]
pub struct RedisVerificationCache {
    /// Redis client for cache operations
    redis_client: RedisClient,
}

impl RedisVerificationCache {
    /// Create a new verification cache over an existing client
    pub fn new(redis_client: RedisClient) -> Self {
        Self { redis_client }
    }

    /// Connect to Redis and build the cache
    pub async fn connect(config: CacheConfig) -> Result<Self, InfrastructureError> {
        Ok(Self::new(RedisClient::new(config).await?))
    }

    /// Underlying client, used by health checks
    pub fn client(&self) -> &RedisClient {
        &self.redis_client
    }

    /// Full Redis key for a verification cache key
    pub(crate) fn storage_key(&self, key: &str) -> String {
        self.redis_client.config().make_key(key)
    }
}

/// Redis rejects `EX 0`, so sub-second TTLs are rounded up
pub(crate) fn expiry_seconds(ttl: Duration) -> u64 {
    let secs = ttl.as_secs();
    if ttl.subsec_nanos() > 0 {
        secs + 1
    } else {
        secs.max(1)
    }
}

#[async_trait]
impl CodeCacheTrait for RedisVerificationCache {
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), String> {
        let key = self.storage_key(key);
        debug!("Storing verification code under '{}'", key);

        self.redis_client
            .set_with_expiry(&key, value, expiry_seconds(ttl))
            .await
            .map_err(|e| e.to_string())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        let key = self.storage_key(key);

        self.redis_client.get(&key).await.map_err(|e| e.to_string())
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        let key = self.storage_key(key);

        self.redis_client
            .delete(&key)
            .await
            .map_err(|e| e.to_string())
    }
}
