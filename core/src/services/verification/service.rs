//! Main verification service implementation

use constant_time_eq::constant_time_eq;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use shelf_shared::utils::validation::{mask_email, normalize_email};

use crate::domain::entities::verification_code::{cache_key, OneTimeCode};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

use super::config::VerificationServiceConfig;
use super::traits::{CodeCacheTrait, NotifierTrait};
use super::types::VerificationOutcome;

/// Verification service for issuing and redeeming email codes
pub struct VerificationService<U, C, N>
where
    U: UserRepository,
    C: CodeCacheTrait,
    N: NotifierTrait + ?Sized,
{
    /// Account lookup
    user_repository: Arc<U>,
    /// Store for outstanding codes
    cache: Arc<C>,
    /// Delivery channel
    notifier: Arc<N>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<U, C, N> VerificationService<U, C, N>
where
    U: UserRepository,
    C: CodeCacheTrait,
    N: NotifierTrait + ?Sized + 'static,
{
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Resolves email addresses to accounts
    /// * `cache` - Holds outstanding codes, one per account
    /// * `notifier` - Delivers codes
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        cache: Arc<C>,
        notifier: Arc<N>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            cache,
            notifier,
            config,
        }
    }

    /// Lifetime given to newly issued codes
    pub fn code_ttl(&self) -> Duration {
        self.config.code_ttl
    }

    /// Issue a verification code to the account registered under `email`
    ///
    /// This method:
    /// 1. Normalises the email and resolves it to an account
    /// 2. Generates a new 4-digit code
    /// 3. Stores it under the account id, replacing any previous code
    /// 4. Sends it and waits for the delivery result
    ///
    /// # Returns
    ///
    /// * `Ok(VerificationOutcome)` - Code stored; delivery result attached
    /// * `Err(DomainError::NotFound)` - Empty email or no such account
    /// * `Err(DomainError::StorageFailure)` - Code could not be stored; nothing was sent
    pub async fn issue_code(&self, email: &str) -> DomainResult<VerificationOutcome> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(DomainError::not_found("email"));
        }

        let user = self
            .user_repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                tracing::info!(
                    email = %mask_email(&email),
                    event = "code_requested_unknown_email",
                    "Verification code requested for unknown email"
                );
                DomainError::not_found("user")
            })?;

        let code = OneTimeCode::issue(user.id, self.config.code_ttl);

        self.bounded("put", self.cache.put(&code.cache_key(), &code.value, code.expires_after))
            .await
            .map_err(|e| {
                tracing::error!(
                    subject_id = user.id,
                    error = %e,
                    event = "code_storage_failed",
                    "Failed to store verification code"
                );
                e
            })?;

        tracing::info!(
            subject_id = user.id,
            ttl_secs = code.expires_after.as_secs(),
            event = "code_issued",
            "Stored new verification code"
        );

        let delivery_error = self.deliver(&user.email, &code.value).await;
        match &delivery_error {
            None => tracing::info!(
                subject_id = user.id,
                email = %mask_email(&user.email),
                event = "code_delivered",
                "Verification code sent"
            ),
            Some(error) => tracing::warn!(
                subject_id = user.id,
                email = %mask_email(&user.email),
                error = %error,
                event = "code_delivery_failed",
                "Verification code stored but not delivered"
            ),
        }

        Ok(VerificationOutcome {
            subject_id: user.id,
            code: code.value,
            ttl: code.expires_after,
            email: user.email,
            delivery_error,
        })
    }

    /// Redeem a code previously issued to `subject_id`
    ///
    /// A matching code is deleted so it cannot be redeemed twice. Expiry is
    /// left entirely to the cache TTL.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Code matched
    /// * `Err(DomainError::CodeNotFound)` - Nothing stored (never issued, expired or consumed)
    /// * `Err(DomainError::InvalidCode)` - Stored code differs
    /// * `Err(DomainError::StorageFailure)` - Cache unreachable
    pub async fn verify_code(&self, subject_id: i64, submitted: &str) -> DomainResult<()> {
        let key = cache_key(subject_id);

        let stored = self
            .bounded("get", self.cache.get(&key))
            .await?
            .ok_or(DomainError::CodeNotFound)?;

        if !constant_time_eq(stored.as_bytes(), submitted.as_bytes()) {
            tracing::info!(
                subject_id = subject_id,
                event = "code_mismatch",
                "Submitted verification code does not match"
            );
            return Err(DomainError::InvalidCode);
        }

        if let Err(e) = self.bounded("delete", self.cache.delete(&key)).await {
            tracing::warn!(
                subject_id = subject_id,
                error = %e,
                event = "code_delete_failed",
                "Verified code could not be removed; it will expire with its TTL"
            );
        }

        tracing::info!(
            subject_id = subject_id,
            event = "code_verified",
            "Verification code accepted"
        );
        Ok(())
    }

    /// Send on a spawned task and wait for it, bounded by the notify timeout
    async fn deliver(&self, email: &str, code: &str) -> Option<String> {
        let notifier = Arc::clone(&self.notifier);
        let email = email.to_string();
        let code = code.to_string();

        let mut handle =
            tokio::spawn(async move { notifier.send_verification_code(&email, &code).await });

        match tokio::time::timeout(self.config.notify_timeout, &mut handle).await {
            Ok(Ok(Ok(()))) => None,
            Ok(Ok(Err(e))) => Some(e),
            Ok(Err(join_error)) => Some(format!("notification task failed: {}", join_error)),
            Err(_) => {
                handle.abort();
                Some(format!(
                    "notification timed out after {}s",
                    self.config.notify_timeout.as_secs()
                ))
            }
        }
    }

    /// Run a cache call under the cache timeout, mapping any failure to `StorageFailure`
    async fn bounded<T>(
        &self,
        operation: &str,
        call: impl Future<Output = Result<T, String>>,
    ) -> DomainResult<T> {
        match tokio::time::timeout(self.config.cache_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(DomainError::StorageFailure {
                message: format!("cache {} failed: {}", operation, e),
            }),
            Err(_) => Err(DomainError::StorageFailure {
                message: format!("cache {} timed out", operation),
            }),
        }
    }
}
