//! Unit tests for the Redis verification cache

use std::time::Duration;

use shelf_core::services::verification::CodeCacheTrait;
use shelf_shared::CacheConfig;

use crate::cache::redis_client::RedisClient;
use crate::cache::verification_cache::{expiry_seconds, RedisVerificationCache};

#[test]
fn test_expiry_seconds_rounds_up() {
    assert_eq!(expiry_seconds(Duration::from_secs(600)), 600);
    assert_eq!(expiry_seconds(Duration::from_millis(1500)), 2);
    assert_eq!(expiry_seconds(Duration::from_millis(1)), 1);
    assert_eq!(expiry_seconds(Duration::ZERO), 1);
}

async fn live_cache(prefix: Option<&str>) -> RedisVerificationCache {
    let mut config = CacheConfig::new(
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
    );
    if let Some(prefix) = prefix {
        config = config.with_prefix(prefix);
    }
    RedisVerificationCache::new(RedisClient::new(config).await.unwrap())
}

#[tokio::test]
#[ignore] // Requires actual Redis server
async fn test_put_get_delete() {
    let cache = live_cache(Some("shelf-test")).await;
    assert_eq!(cache.storage_key("9001"), "shelf-test:9001");

    cache
        .put("9001", "4821", Duration::from_secs(60))
        .await
        .unwrap();
    assert_eq!(cache.get("9001").await.unwrap(), Some("4821".to_string()));

    // Reissue replaces the previous code
    cache
        .put("9001", "1234", Duration::from_secs(60))
        .await
        .unwrap();
    assert_eq!(cache.get("9001").await.unwrap(), Some("1234".to_string()));

    assert!(cache.delete("9001").await.unwrap());
    assert_eq!(cache.get("9001").await.unwrap(), None);
}

#[tokio::test]
#[ignore] // Requires actual Redis server
async fn test_code_expires() {
    let cache = live_cache(Some("shelf-test")).await;

    cache
        .put("9002", "5555", Duration::from_secs(1))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(1500)).await;

    assert_eq!(cache.get("9002").await.unwrap(), None);
}

#[tokio::test]
#[ignore] // Requires actual Redis server
async fn test_unprefixed_keys_are_bare_ids() {
    let cache = live_cache(None).await;
    assert_eq!(cache.storage_key("9003"), "9003");

    cache
        .put("9003", "0042", Duration::from_secs(30))
        .await
        .unwrap();
    let raw = cache.client().get("9003").await.unwrap();
    assert_eq!(raw, Some("0042".to_string()));
    cache.delete("9003").await.unwrap();
}
