//! Unit tests for the mail notifiers

use lettre::message::Mailbox;

use std::sync::Arc;

use shelf_core::domain::entities::user::User;
use shelf_core::repositories::MockUserRepository;
use shelf_core::services::verification::mock::MockCodeCache;
use shelf_core::services::verification::{
    NotifierTrait, VerificationService, VerificationServiceConfig,
};
use shelf_shared::config::{MailConfig, MailProvider};

use crate::mail::smtp::{code_text, compose};
use crate::mail::{create_notifier, LogNotifier, SmtpNotifier};
use crate::InfrastructureError;

fn smtp_config(template_path: &str) -> MailConfig {
    MailConfig {
        provider: MailProvider::Smtp,
        username: "noreply@shelf.test".to_string(),
        password: "app-password".to_string(),
        template_path: template_path.to_string(),
        ..Default::default()
    }
}

fn temp_template(name: &str, content: &str) -> String {
    let path = std::env::temp_dir().join(format!("shelf-{}-{}.html", name, std::process::id()));
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_code_text() {
    assert_eq!(code_text("0042"), "Your verification code is: 0042");
}

#[test]
fn test_compose_multipart_message() {
    let sender: Mailbox = "noreply@shelf.test".parse().unwrap();
    let message = compose(
        &sender,
        "jane@example.com",
        "Verification Code",
        "<p>Hello</p>",
        "4821",
    )
    .unwrap();

    let raw = String::from_utf8(message.formatted()).unwrap();
    assert!(raw.contains("From: noreply@shelf.test"));
    assert!(raw.contains("To: jane@example.com"));
    assert!(raw.contains("Subject: Verification Code"));
    assert!(raw.contains("multipart/alternative"));
    assert!(raw.contains("text/plain"));
    assert!(raw.contains("text/html"));
    assert!(raw.contains("<p>Hello</p>Your verification code is: 4821"));
}

#[test]
fn test_compose_rejects_bad_recipient() {
    let sender: Mailbox = "noreply@shelf.test".parse().unwrap();
    let result = compose(&sender, "not an address", "Verification Code", "", "4821");
    assert!(matches!(result, Err(InfrastructureError::Mail(_))));
}

#[test]
fn test_smtp_notifier_requires_credentials() {
    let config = MailConfig {
        provider: MailProvider::Smtp,
        ..Default::default()
    };
    assert!(matches!(
        SmtpNotifier::new(config),
        Err(InfrastructureError::Config(_))
    ));
}

#[test]
fn test_smtp_notifier_builds_with_credentials() {
    assert!(SmtpNotifier::new(smtp_config("verification.html")).is_ok());
}

#[tokio::test]
async fn test_build_message_reads_template() {
    let path = temp_template("build", "<h1>Shelf</h1>");
    let notifier = SmtpNotifier::new(smtp_config(&path)).unwrap();

    let message = notifier.build_message("jane@example.com", "1234").await.unwrap();
    let raw = String::from_utf8(message.formatted()).unwrap();
    assert!(raw.contains("<h1>Shelf</h1>Your verification code is: 1234"));

    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn test_missing_template_fails_send() {
    let notifier = SmtpNotifier::new(smtp_config("/nonexistent/verification.html")).unwrap();

    let error = notifier
        .send_verification_code("jane@example.com", "1234")
        .await
        .unwrap_err();
    assert!(error.contains("template"));
}

#[tokio::test]
async fn test_log_notifier_counts_messages() {
    let notifier = LogNotifier::new();
    notifier
        .send_verification_code("jane@example.com", "1234")
        .await
        .unwrap();
    notifier
        .send_verification_code("rick@example.com", "5678")
        .await
        .unwrap();
    assert_eq!(notifier.get_message_count(), 2);
}

#[tokio::test]
async fn test_factory_selects_provider() {
    let mock = create_notifier(&MailConfig::default()).unwrap();
    assert!(mock
        .send_verification_code("jane@example.com", "1234")
        .await
        .is_ok());

    // SMTP is chosen: the unreadable template fails before any network I/O
    let smtp = create_notifier(&smtp_config("/nonexistent/verification.html")).unwrap();
    assert!(smtp
        .send_verification_code("jane@example.com", "1234")
        .await
        .is_err());
}

#[test]
fn test_factory_rejects_smtp_without_credentials() {
    let config = MailConfig {
        provider: MailProvider::Smtp,
        template_path: "/nonexistent/verification.html".to_string(),
        ..Default::default()
    };

    let result = create_notifier(&config);
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[tokio::test]
async fn test_failed_smtp_send_surfaces_as_delivery_error() {
    let repo = Arc::new(MockUserRepository::new());
    repo.insert(User::new(
        "Doe",
        "Jane",
        "jane@example.com",
        "08012345678",
        "1 Shelf Road",
        "hash",
    ))
    .await;

    // Template is unreadable, so the send fails before any network I/O
    let notifier = create_notifier(&smtp_config("/nonexistent/verification.html")).unwrap();
    let service = VerificationService::new(
        repo,
        Arc::new(MockCodeCache::new()),
        notifier,
        VerificationServiceConfig::default(),
    );

    let outcome = service.issue_code("jane@example.com").await.unwrap();
    assert!(outcome.delivery_error.is_some());
}
