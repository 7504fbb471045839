//! User service implementation

use std::sync::Arc;

use shelf_shared::utils::validation::{is_valid_email, is_valid_phone, normalize_email};

use crate::domain::entities::token::AuthIdentity;
use crate::domain::entities::user::{ProfileUpdate, User};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

use super::password::hash_password;

/// Account operations available to authenticated callers
pub struct UserService<U: UserRepository> {
    user_repository: Arc<U>,
    hash_cost: u32,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self {
            user_repository,
            hash_cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Override the bcrypt cost (tests use the minimum)
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    /// List accounts; administrators only
    pub async fn list_users(
        &self,
        caller: &AuthIdentity,
        limit: i64,
        offset: i64,
    ) -> DomainResult<Vec<User>> {
        if !caller.is_admin() {
            tracing::warn!(
                user_id = caller.user_id,
                event = "list_users_forbidden",
                "Non-admin attempted to list users"
            );
            return Err(DomainError::unauthorized("admin role required"));
        }

        self.user_repository.list(limit, offset).await
    }

    /// Fetch the caller's own account
    pub async fn profile(&self, user_id: i64) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("user"))
    }

    /// Look an account up by email
    pub async fn find_by_email(&self, email: &str) -> DomainResult<User> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(DomainError::not_found("email"));
        }

        self.user_repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| DomainError::not_found("user"))
    }

    /// Update email, phone and address of the caller's own account
    pub async fn update_profile(
        &self,
        caller_id: i64,
        update: ProfileUpdate,
    ) -> DomainResult<User> {
        ensure_owner(caller_id, update.id)?;

        if !is_valid_email(update.email.trim()) {
            return Err(DomainError::validation("invalid email address"));
        }
        if !is_valid_phone(&update.phone) {
            return Err(DomainError::validation("phone must be 11 characters"));
        }
        if update.address.trim().is_empty() {
            return Err(DomainError::validation("address is required"));
        }

        let mut user = self.profile(update.id).await?;
        user.apply(&ProfileUpdate {
            email: normalize_email(&update.email),
            ..update
        });

        let updated = self.user_repository.update(user).await?;
        tracing::info!(user_id = updated.id, event = "profile_updated", "User profile updated");
        Ok(updated)
    }

    /// Replace the password of the caller's own account
    pub async fn update_password(
        &self,
        caller_id: i64,
        id: i64,
        password: &str,
    ) -> DomainResult<User> {
        ensure_owner(caller_id, id)?;

        let hash = hash_password(password, self.hash_cost).await?;
        let mut user = self.profile(id).await?;
        user.set_password_hash(hash);

        let updated = self.user_repository.update(user).await?;
        tracing::info!(user_id = updated.id, event = "password_updated", "User password updated");
        Ok(updated)
    }

    /// Delete the caller's own account
    pub async fn deactivate(&self, caller_id: i64, id: i64) -> DomainResult<()> {
        ensure_owner(caller_id, id)?;

        if !self.user_repository.delete(id).await? {
            return Err(DomainError::not_found("user"));
        }

        tracing::info!(user_id = id, event = "user_deactivated", "User deactivated");
        Ok(())
    }
}

fn ensure_owner(caller_id: i64, target_id: i64) -> DomainResult<()> {
    if caller_id != target_id {
        tracing::warn!(
            caller_id = caller_id,
            target_id = target_id,
            event = "ownership_mismatch",
            "Caller attempted to modify another account"
        );
        return Err(DomainError::unauthorized("invalid token"));
    }
    Ok(())
}
