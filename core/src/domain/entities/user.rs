//! User entity representing a registered Shelf account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity representing a registered account
///
/// The password hash never leaves the process: it is skipped on
/// serialization so the entity can be returned from handlers directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: i64,

    pub lastname: String,

    pub firstname: String,

    /// Lower-cased, unique email address
    pub email: String,

    /// 11-character phone number
    pub phone: String,

    pub address: String,

    /// bcrypt hash of the password
    #[serde(skip_serializing, default)]
    pub hashed_password: String,

    /// Whether the user has administrator rights
    pub is_admin: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, not yet persisted, user (id 0 until stored)
    pub fn new(
        lastname: impl Into<String>,
        firstname: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        hashed_password: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            lastname: lastname.into(),
            firstname: firstname.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
            hashed_password: hashed_password.into(),
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a profile update and bump `updated_at`
    pub fn apply(&mut self, update: &ProfileUpdate) {
        self.email = update.email.to_lowercase();
        self.phone = update.phone.clone();
        self.address = update.address.clone();
        self.updated_at = Utc::now();
    }

    /// Replace the stored password hash
    pub fn set_password_hash(&mut self, hash: String) {
        self.hashed_password = hash;
        self.updated_at = Utc::now();
    }
}

/// Editable profile fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub id: i64,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User::new(
            "Doe",
            "Jane",
            "jane@example.com",
            "08012345678",
            "1 Shelf Road",
            "$2b$12$hash",
        )
    }

    #[test]
    fn test_new_user_creation() {
        let user = sample();
        assert_eq!(user.id, 0);
        assert!(!user.is_admin);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("hashed_password").is_none());
        assert_eq!(json["email"], "jane@example.com");
    }

    #[test]
    fn test_apply_lowercases_email() {
        let mut user = sample();
        user.apply(&ProfileUpdate {
            id: user.id,
            email: "Jane.New@Example.com".to_string(),
            phone: "09087654321".to_string(),
            address: "2 Shelf Road".to_string(),
        });

        assert_eq!(user.email, "jane.new@example.com");
        assert_eq!(user.phone, "09087654321");
        assert!(user.updated_at >= user.created_at);
    }
}
