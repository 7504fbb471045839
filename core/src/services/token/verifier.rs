//! HS256 JWT verification

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use shelf_shared::AuthConfig;

use crate::domain::entities::token::{AuthIdentity, Claims, Role};
use crate::errors::{DomainError, TokenError};

/// Turns a bearer token into the caller's identity
pub trait TokenVerifier: Send + Sync {
    /// Verify `token` and extract `(user id, role)`
    fn verify(&self, token: &str) -> Result<AuthIdentity, DomainError>;
}

/// Verifier for HS256-signed JWTs carrying `sub`, `role` and `exp`
pub struct JwtTokenVerifier {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    admin_role: String,
}

impl JwtTokenVerifier {
    /// Creates a verifier from the auth configuration
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_secs;
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            admin_role: config.admin_role.clone(),
        }
    }

    /// Sign claims with the same secret; used by tooling and tests
    pub fn sign(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            DomainError::Internal {
                message: format!("Failed to sign token: {}", e),
            }
        })
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<AuthIdentity, DomainError> {
        if token.is_empty() {
            return Err(TokenError::MissingToken.into());
        }

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                let error = match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    ErrorKind::MissingRequiredClaim(claim) => TokenError::MissingClaim {
                        claim: claim.clone(),
                    },
                    ErrorKind::Json(_) => TokenError::InvalidClaims,
                    _ => TokenError::InvalidTokenFormat,
                };
                DomainError::Token(error)
            })?;

        let claims = token_data.claims;
        let user_id = claims.user_id().ok_or(TokenError::InvalidClaims)?;

        Ok(AuthIdentity::new(
            user_id,
            Role::from_claim(&claims.role, &self.admin_role),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> JwtTokenVerifier {
        JwtTokenVerifier::new(&AuthConfig::new("test-secret"))
    }

    #[test]
    fn test_verify_valid_token() {
        let verifier = verifier();
        let token = verifier.sign(&Claims::new(7, "admin", 15)).unwrap();

        let identity = verifier.verify(&token).unwrap();
        assert_eq!(identity.user_id, 7);
        assert_eq!(identity.role, Role::Admin);
    }

    #[test]
    fn test_non_admin_role() {
        let verifier = verifier();
        let token = verifier.sign(&Claims::new(7, "customer", 15)).unwrap();

        assert_eq!(verifier.verify(&token).unwrap().role, Role::User);
    }

    #[test]
    fn test_expired_token() {
        let verifier = verifier();
        let token = verifier.sign(&Claims::new(7, "user", -10)).unwrap();

        assert!(matches!(
            verifier.verify(&token),
            Err(DomainError::Token(TokenError::TokenExpired))
        ));
    }

    #[test]
    fn test_wrong_secret() {
        let other = JwtTokenVerifier::new(&AuthConfig::new("another-secret"));
        let token = other.sign(&Claims::new(7, "user", 15)).unwrap();

        assert!(matches!(
            verifier().verify(&token),
            Err(DomainError::Token(TokenError::InvalidSignature))
        ));
    }

    #[test]
    fn test_garbage_and_empty_tokens() {
        let verifier = verifier();
        assert!(matches!(
            verifier.verify("not.a.jwt"),
            Err(DomainError::Token(_))
        ));
        assert!(matches!(
            verifier.verify(""),
            Err(DomainError::Token(TokenError::MissingToken))
        ));
    }

    #[test]
    fn test_non_numeric_subject() {
        let verifier = verifier();
        let claims = Claims {
            sub: "abc".to_string(),
            ..Claims::new(1, "user", 15)
        };
        let token = verifier.sign(&claims).unwrap();

        assert!(matches!(
            verifier.verify(&token),
            Err(DomainError::Token(TokenError::InvalidClaims))
        ));
    }
}
