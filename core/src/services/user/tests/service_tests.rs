//! Unit tests for user service

use std::sync::Arc;

use crate::domain::entities::token::{AuthIdentity, Role};
use crate::domain::entities::user::{ProfileUpdate, User};
use crate::errors::DomainError;
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::user::{verify_password, UserService};

async fn setup() -> (UserService<MockUserRepository>, Arc<MockUserRepository>, User) {
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
    repo.insert(User::new(
        "Roe",
        "Rick",
        "rick@example.com",
        "08087654321",
        "2 Shelf Road",
        "hash",
    ))
    .await;

    let service = UserService::new(repo.clone()).with_hash_cost(4);
    (service, repo, user)
}

fn update_for(user: &User, email: &str) -> ProfileUpdate {
    ProfileUpdate {
        id: user.id,
        email: email.to_string(),
        phone: "09011112222".to_string(),
        address: "3 Shelf Road".to_string(),
    }
}

#[tokio::test]
async fn test_list_users_requires_admin() {
    let (service, _, user) = setup().await;

    let admin = AuthIdentity::new(user.id, Role::Admin);
    let users = service.list_users(&admin, 10, 0).await.unwrap();
    assert_eq!(users.len(), 2);

    let plain = AuthIdentity::new(user.id, Role::User);
    assert!(matches!(
        service.list_users(&plain, 10, 0).await,
        Err(DomainError::Unauthorized { .. })
    ));
}

#[tokio::test]
async fn test_profile_and_lookup() {
    let (service, _, user) = setup().await;

    assert_eq!(service.profile(user.id).await.unwrap().email, user.email);
    assert!(matches!(
        service.profile(999).await,
        Err(DomainError::NotFound { .. })
    ));

    let found = service.find_by_email(" JANE@example.com").await.unwrap();
    assert_eq!(found.id, user.id);
    assert!(matches!(
        service.find_by_email("  ").await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_update_profile_lowercases_email() {
    let (service, _, user) = setup().await;

    let updated = service
        .update_profile(user.id, update_for(&user, "Jane.Doe@Example.com"))
        .await
        .unwrap();

    assert_eq!(updated.email, "jane.doe@example.com");
    assert_eq!(updated.phone, "09011112222");
    assert!(updated.updated_at >= user.updated_at);
}

#[tokio::test]
async fn test_update_profile_other_account_rejected() {
    let (service, _, user) = setup().await;

    let result = service
        .update_profile(user.id + 1, update_for(&user, "jane@example.com"))
        .await;
    assert!(matches!(result, Err(DomainError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_update_profile_duplicate_email() {
    let (service, _, user) = setup().await;

    let result = service
        .update_profile(user.id, update_for(&user, "rick@example.com"))
        .await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));
}

#[tokio::test]
async fn test_update_profile_validation() {
    let (service, _, user) = setup().await;

    let mut bad_phone = update_for(&user, "jane@example.com");
    bad_phone.phone = "123".to_string();
    assert!(matches!(
        service.update_profile(user.id, bad_phone).await,
        Err(DomainError::Validation { .. })
    ));

    assert!(matches!(
        service
            .update_profile(user.id, update_for(&user, "not-an-email"))
            .await,
        Err(DomainError::Validation { .. })
    ));
}

#[tokio::test]
async fn test_update_password_hashes() {
    let (service, repo, user) = setup().await;

    service
        .update_password(user.id, user.id, "N3w$ecret")
        .await
        .unwrap();

    let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert!(verify_password("N3w$ecret", &stored.hashed_password));
    assert!(!verify_password("wrong", &stored.hashed_password));
}

#[tokio::test]
async fn test_update_password_policy() {
    let (service, _, user) = setup().await;

    let result = service.update_password(user.id, user.id, "weakpass").await;
    match result {
        Err(DomainError::Validation { message }) => {
            assert!(message.contains("number"));
            assert!(message.contains("upper case"));
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_update_password_other_account_rejected() {
    let (service, _, user) = setup().await;

    let result = service.update_password(user.id, user.id + 1, "N3w$ecret").await;
    assert!(matches!(result, Err(DomainError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_deactivate() {
    let (service, repo, user) = setup().await;

    assert!(matches!(
        service.deactivate(user.id, user.id + 1).await,
        Err(DomainError::Unauthorized { .. })
    ));

    service.deactivate(user.id, user.id).await.unwrap();
    assert!(repo.find_by_id(user.id).await.unwrap().is_none());

    assert!(matches!(
        service.deactivate(user.id, user.id).await,
        Err(DomainError::NotFound { .. })
    ));
}
