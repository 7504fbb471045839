//! User repository trait defining the interface for account persistence.
//!
//! The trait is async-first and reports store failures as `DomainError`
//! so services can propagate them with `?`.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example
/// ```no_run
/// # use shelf_core::repositories::UserRepository;
/// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
/// match repo.find_by_email("jane@example.com").await? {
///     Some(user) => println!("User found: {}", user.id),
///     None => println!("User not found"),
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their (already normalised) email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// List users ordered by id
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>, DomainError>;

    /// Create a new user; the returned entity carries the assigned id
    ///
    /// # Returns
    /// * `Err(DomainError::Conflict)` - Email already registered
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Persist every mutable field of an existing user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored row after the update
    /// * `Err(DomainError::NotFound)` - No user with that id
    /// * `Err(DomainError::Conflict)` - New email belongs to another user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
