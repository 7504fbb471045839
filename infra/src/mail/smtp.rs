//! SMTP notifier
//!
//! Every send reads the HTML template from disk, builds a
//! `multipart/alternative` message and submits it through an authenticated
//! STARTTLS relay. lettre's `pool` feature is off, so each message opens its
//! own connection.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use tracing::{debug, error};

use shelf_core::services::verification::NotifierTrait;
use shelf_shared::config::MailConfig;
use shelf_shared::utils::validation::mask_email;

use crate::InfrastructureError;

/// Plain-text body for a code; the HTML body ends with the same line
pub fn code_text(code: &str) -> String {
    format!("Your verification code is: {}", code)
}

/// Notifier that sends codes through an SMTP relay
#[derive(Clone)]
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    config: MailConfig,
}

impl std::fmt::Debug for SmtpNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpNotifier")
            .field("host", &self.config.smtp_host)
            .field("port", &self.config.smtp_port)
            .field("sender", &self.sender)
            .finish()
    }
}

impl SmtpNotifier {
    /// Build the relay transport and validate the sender address
    ///
    /// No connection is opened here; the relay is first contacted on send.
    pub fn new(config: MailConfig) -> Result<Self, InfrastructureError> {
        if !config.has_credentials() {
            return Err(InfrastructureError::Config(
                "SMTP username and password are required".to_string(),
            ));
        }

        let sender: Mailbox = config.sender().parse()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(Duration::from_secs(config.timeout_secs)))
            .build();

        Ok(Self {
            transport,
            sender,
            config,
        })
    }

    /// Compose the verification message for `email`
    pub async fn build_message(&self, email: &str, code: &str) -> Result<Message, InfrastructureError> {
        let template = tokio::fs::read_to_string(&self.config.template_path)
            .await
            .map_err(|e| {
                InfrastructureError::Mail(format!(
                    "cannot read template {}: {}",
                    self.config.template_path, e
                ))
            })?;

        compose(&self.sender, email, &self.config.subject, &template, code)
    }

    async fn send(&self, email: &str, code: &str) -> Result<(), InfrastructureError> {
        let message = self.build_message(email, code).await?;

        debug!(
            email = %mask_email(email),
            host = %self.config.smtp_host,
            "Submitting verification message to SMTP relay"
        );

        self.transport.send(message).await?;
        Ok(())
    }
}

/// Build a `multipart/alternative` message from a template
pub(crate) fn compose(
    sender: &Mailbox,
    email: &str,
    subject: &str,
    template: &str,
    code: &str,
) -> Result<Message, InfrastructureError> {
    let text = code_text(code);
    let html = format!("{}{}", template, text);

    let message = Message::builder()
        .from(sender.clone())
        .to(email.parse()?)
        .subject(subject)
        .multipart(
            MultiPart::alternative()
                .singlepart(SinglePart::plain(text))
                .singlepart(SinglePart::html(html)),
        )?;

    Ok(message)
}

#[async_trait]
impl NotifierTrait for SmtpNotifier {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<(), String> {
        self.send(email, code).await.map_err(|e| {
            error!(
                email = %mask_email(email),
                error = %e,
                "Failed to send verification code"
            );
            e.to_string()
        })
    }
}
