//! Mail Module
//!
//! Delivery channels for verification codes:
//!
//! - **SMTP**: authenticated relay with STARTTLS, HTML template plus plain text
//! - **Log**: development notifier that records the delivery in the log only

use std::sync::Arc;

use shelf_core::services::verification::NotifierTrait;
use shelf_shared::config::{MailConfig, MailProvider};

use crate::InfrastructureError;

pub mod log_notifier;
pub mod smtp;

pub use log_notifier::LogNotifier;
pub use smtp::SmtpNotifier;

#[cfg(test)]
mod tests;

/// Create a notifier based on configuration
///
/// A selected SMTP provider that cannot be built is an error: falling back to
/// the log notifier would report undelivered codes as sent.
pub fn create_notifier(config: &MailConfig) -> Result<Arc<dyn NotifierTrait>, InfrastructureError> {
    match config.provider {
        MailProvider::Mock => {
            tracing::info!("Using log notifier for verification codes");
            Ok(Arc::new(LogNotifier::new()))
        }
        MailProvider::Smtp => {
            let notifier = SmtpNotifier::new(config.clone()).map_err(|e| {
                tracing::error!("Failed to initialize SMTP notifier: {}", e);
                e
            })?;
            tracing::info!(
                host = %config.smtp_host,
                port = config.smtp_port,
                "Using SMTP notifier for verification codes"
            );
            Ok(Arc::new(notifier))
        }
    }
}
