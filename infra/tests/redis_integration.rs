//! Integration tests for the Redis verification cache
//!
//! These tests require a running Redis instance to execute.
//! Run with: cargo test -p shelf_infra --test redis_integration -- --ignored

use std::sync::Arc;
use std::time::Duration;

use shelf_core::domain::entities::user::User;
use shelf_core::errors::DomainError;
use shelf_core::repositories::MockUserRepository;
use shelf_core::services::verification::mock::MockNotifier;
use shelf_core::services::verification::{VerificationService, VerificationServiceConfig};
use shelf_infra::cache::{CacheConfig, RedisClient, RedisVerificationCache};

fn redis_config() -> CacheConfig {
    CacheConfig::new(
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
    )
    .with_prefix("shelf-it")
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_redis_connection() {
    let client = RedisClient::new(redis_config()).await;
    assert!(client.is_ok(), "Failed to connect to Redis");
    assert!(client.unwrap().health_check().await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_issue_and_verify_through_redis() {
    let repo = Arc::new(MockUserRepository::new());
    let user = repo
        .insert(User::new(
            "Doe",
            "Jane",
            "jane@example.com",
            "08012345678",
            "1 Shelf Road",
            "hash",
        ))
        .await;

    let cache = Arc::new(RedisVerificationCache::connect(redis_config()).await.unwrap());
    let notifier = Arc::new(MockNotifier::new());
    let service = VerificationService::new(
        repo,
        cache.clone(),
        notifier.clone(),
        VerificationServiceConfig {
            code_ttl: Duration::from_secs(30),
            ..Default::default()
        },
    );

    let outcome = service.issue_code("Jane@Example.com").await.unwrap();
    assert_eq!(
        notifier.last_code_for("jane@example.com").await,
        Some(outcome.code.clone())
    );

    let wrong = if outcome.code == "1000" { "1001" } else { "1000" };
    assert!(matches!(
        service.verify_code(user.id, wrong).await,
        Err(DomainError::InvalidCode)
    ));

    service.verify_code(user.id, &outcome.code).await.unwrap();
    assert!(matches!(
        service.verify_code(user.id, &outcome.code).await,
        Err(DomainError::CodeNotFound)
    ));
}
