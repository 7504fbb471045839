//! Logging notifier for development
//!
//! Records each delivery in the log instead of sending it. The code itself is
//! never written out.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use shelf_core::services::verification::NotifierTrait;
use shelf_shared::utils::validation::mask_email;

/// Notifier that logs deliveries and always succeeds
#[derive(Clone, Default)]
pub struct LogNotifier {
    /// Counter for tracking number of messages "sent"
    message_count: Arc<AtomicU64>,
}

impl LogNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of messages handled
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotifierTrait for LogNotifier {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<(), String> {
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        let message_id = format!("log_{}", Uuid::new_v4());

        info!(
            target: "mail_service",
            provider = "log",
            email = %mask_email(email),
            message_id = %message_id,
            message_number = count,
            code_length = code.len(),
            "Verification code delivery logged (not sent)"
        );

        Ok(())
    }
}
