//! Mapping from domain errors to HTTP responses
//!
//! Every failure leaves the API as the standard `ApiResponse` envelope with
//! `status = "error"`, the HTTP status mirrored in `statusCode` and the cause
//! in `anyError`. Internal causes are logged, never echoed.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use shelf_core::errors::{DomainError, TokenError};
use shelf_shared::ApiResponse;

/// Error type returned by every handler
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    /// Malformed request body, query string or path
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(DomainError::validation(message))
    }

    /// Public message and client-visible cause for this error
    fn describe(&self) -> (&'static str, String) {
        match &self.0 {
            DomainError::Validation { message } => ("invalid request", message.clone()),
            DomainError::NotFound { resource } if resource == "email" => {
                ("no input entered", self.0.to_string())
            }
            DomainError::NotFound { resource } if resource == "user" => (
                "The requested user with the specified email does not exist.",
                self.0.to_string(),
            ),
            DomainError::NotFound { .. } => ("resource not found", self.0.to_string()),
            DomainError::CodeNotFound => ("Key does not exist", self.0.to_string()),
            DomainError::InvalidCode => ("Invalid verification code", self.0.to_string()),
            DomainError::Unauthorized { .. } => ("Unauthorized", self.0.to_string()),
            DomainError::Token(TokenError::MissingToken) => (
                "Unauthorized: Missing or invalid token",
                self.0.to_string(),
            ),
            DomainError::Token(_) => ("failed to verify token", self.0.to_string()),
            DomainError::Conflict { .. } => ("email already in use", self.0.to_string()),
            DomainError::StorageFailure { .. } => (
                "Issue Encountered, try again later",
                "verification code store unavailable".to_string(),
            ),
            DomainError::NotificationFailure { .. }
            | DomainError::Database(_)
            | DomainError::Internal { .. } => (
                "Issue Encountered, try again later",
                "internal server error".to_string(),
            ),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let reasons: Vec<String> = errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                format!("{}: {}", field, reasons.join(", "))
            })
            .collect();
        fields.sort();

        Self::bad_request(fields.join("; "))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
            DomainError::NotFound { .. } | DomainError::CodeNotFound => StatusCode::NOT_FOUND,
            DomainError::InvalidCode
            | DomainError::Unauthorized { .. }
            | DomainError::Token(_) => StatusCode::UNAUTHORIZED,
            DomainError::Conflict { .. } => StatusCode::CONFLICT,
            DomainError::StorageFailure { .. }
            | DomainError::NotificationFailure { .. }
            | DomainError::Database(_)
            | DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let (message, cause) = self.describe();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.0, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self.0, "Request rejected");
        }

        HttpResponse::build(status).json(ApiResponse::error(status.as_u16(), message, cause))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(error: DomainError) -> (StatusCode, serde_json::Value) {
        let response = ApiError::from(error).error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_status_mapping() {
        let cases = vec![
            (DomainError::validation("bad"), StatusCode::BAD_REQUEST),
            (DomainError::not_found("user"), StatusCode::NOT_FOUND),
            (DomainError::CodeNotFound, StatusCode::NOT_FOUND),
            (DomainError::InvalidCode, StatusCode::UNAUTHORIZED),
            (DomainError::unauthorized("nope"), StatusCode::UNAUTHORIZED),
            (TokenError::TokenExpired.into(), StatusCode::UNAUTHORIZED),
            (
                DomainError::Conflict {
                    message: "dup".to_string(),
                },
                StatusCode::CONFLICT,
            ),
            (
                DomainError::StorageFailure {
                    message: "down".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                DomainError::Database("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(ApiError::from(error).status_code(), expected);
        }
    }

    #[actix_web::test]
    async fn test_envelope_shape() {
        let (status, body) = body_of(DomainError::CodeNotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "error");
        assert_eq!(body["statusCode"], 404);
        assert_eq!(body["message"], "Key does not exist");
        assert!(body.get("data").is_none());
    }

    #[actix_web::test]
    async fn test_database_details_are_hidden() {
        let (_, body) = body_of(DomainError::Database("password=hunter2".to_string())).await;
        assert_eq!(body["anyError"], "internal server error");
    }
}
