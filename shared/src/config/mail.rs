//! Mail delivery configuration

use serde::{Deserialize, Serialize};

/// Which notifier delivers verification codes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Authenticated SMTP relay with STARTTLS
    Smtp,
    /// Logs the delivery instead of sending (development)
    #[default]
    Mock,
}

/// SMTP relay and message content configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MailConfig {
    /// Notifier implementation
    pub provider: MailProvider,

    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP relay port (STARTTLS)
    pub smtp_port: u16,

    /// SMTP username; also the sender address when `from_address` is empty
    pub username: String,

    /// SMTP password, normally supplied through `APP__MAIL__PASSWORD`
    pub password: String,

    /// Sender address
    pub from_address: String,

    /// Message subject
    pub subject: String,

    /// HTML template read on every send
    pub template_path: String,

    /// Relay command timeout in seconds
    pub timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::Mock,
            smtp_host: String::from("smtp.gmail.com"),
            smtp_port: 587,
            username: String::new(),
            password: String::new(),
            from_address: String::new(),
            subject: String::from("Verification Code"),
            template_path: String::from("verification.html"),
            timeout_secs: 10,
        }
    }
}

impl MailConfig {
    /// Address used in the `From` header
    pub fn sender(&self) -> &str {
        if self.from_address.is_empty() {
            &self.username
        } else {
            &self.from_address
        }
    }

    /// Check whether relay credentials are configured
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}
