//! In-memory implementation of UserRepository for tests and local runs

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<BTreeMap<i64, User>>>,
    next_id: AtomicI64,
    should_fail: AtomicBool,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicI64::new(1),
            should_fail: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail with a database error
    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    /// Store a user directly, assigning an id when it has none
    pub async fn insert(&self, mut user: User) -> User {
        if user.id == 0 {
            user.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        }
        self.users.write().await.insert(user.id, user.clone());
        user
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::Database("mock database unavailable".to_string()));
        }
        Ok(())
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.check_failure()?;
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        self.check_failure()?;
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, DomainError> {
        self.check_failure()?;
        let users = self.users.read().await;
        Ok(users
            .values()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.check_failure()?;
        if self.users.read().await.values().any(|u| u.email == user.email) {
            return Err(DomainError::Conflict {
                message: "Email already registered".to_string(),
            });
        }
        Ok(self.insert(user).await)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        self.check_failure()?;
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainError::not_found("User"));
        }
        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(DomainError::Conflict {
                message: "Email already registered".to_string(),
            });
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        self.check_failure()?;
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> User {
        User::new("Doe", "Jane", email, "08012345678", "1 Shelf Road", "hash")
    }

    #[tokio::test]
    async fn test_create_assigns_ids_and_rejects_duplicates() {
        let repo = MockUserRepository::new();

        let first = repo.create(user("a@example.com")).await.unwrap();
        let second = repo.create(user("b@example.com")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let dup = repo.create(user("a@example.com")).await;
        assert!(matches!(dup, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_list_respects_limit_and_offset() {
        let repo = MockUserRepository::new();
        for i in 0..5 {
            repo.insert(user(&format!("u{}@example.com", i))).await;
        }

        let page = repo.list(2, 1).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, 2);
    }

    #[tokio::test]
    async fn test_failure_switch() {
        let repo = MockUserRepository::new();
        repo.set_should_fail(true);
        assert!(matches!(
            repo.find_by_email("a@example.com").await,
            Err(DomainError::Database(_))
        ));
    }
}
