//! Bearer token claims and the identity they resolve to.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Role claim value granting administrator access
pub const ADMIN_ROLE: &str = "admin";

/// Caller role derived from the token's `role` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Map a raw claim onto a role; anything but the admin value is a plain user
    pub fn from_claim(claim: &str, admin_role: &str) -> Self {
        if claim == admin_role {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (decimal user id)
    pub sub: String,

    /// Role claim (`admin` or anything else)
    pub role: String,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `user_id` that expire after `ttl_minutes`
    pub fn new(user_id: i64, role: impl Into<String>, ttl_minutes: i64) -> Self {
        Self {
            sub: user_id.to_string(),
            role: role.into(),
            exp: (Utc::now() + Duration::minutes(ttl_minutes)).timestamp(),
        }
    }

    /// Parse the subject as a user id
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

/// Authenticated caller, produced by a `TokenVerifier`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthIdentity {
    pub user_id: i64,
    pub role: Role,
}

impl AuthIdentity {
    pub fn new(user_id: i64, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_claim() {
        assert_eq!(Role::from_claim("admin", ADMIN_ROLE), Role::Admin);
        assert_eq!(Role::from_claim("user", ADMIN_ROLE), Role::User);
        assert_eq!(Role::from_claim("", ADMIN_ROLE), Role::User);
    }

    #[test]
    fn test_claims_subject_parsing() {
        let claims = Claims::new(42, "user", 15);
        assert_eq!(claims.user_id(), Some(42));
        assert!(claims.exp > Utc::now().timestamp());

        let bad = Claims {
            sub: "not-a-number".to_string(),
            ..claims
        };
        assert_eq!(bad.user_id(), None);
    }
}
