//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Required length of a stored phone number
pub const PHONE_LENGTH: usize = 11;

/// Trim and lower-case an email address for lookup and storage
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check if an email address is syntactically plausible
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check the fixed-length phone format used by account records
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().count() == PHONE_LENGTH
}

/// Mask an email address for logging (`j***@example.com`)
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}

/// Check a password against the account password policy
///
/// # Returns
///
/// * `Ok(())` - Password satisfies every rule
/// * `Err(Vec<&str>)` - One message per violated rule
pub fn check_password_strength(password: &str) -> Result<(), Vec<&'static str>> {
    let mut failures = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        failures.push("Password must be minimum of 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        failures.push("Password must contain at least a number");
    }
    if !password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
    {
        failures.push("Password must contain at least a symbol");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        failures.push("Password must contain an upper case letter");
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures)
    }
}
