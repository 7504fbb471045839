//! API response envelope and health check types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Response status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Standard JSON envelope returned by every `/users` endpoint
///
/// Serialises as `{status, statusCode, message, anyError, data}`. `anyError`
/// is always present (null when nothing went wrong) so clients can branch on
/// it without checking for the key; `data` is omitted when there is none.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// `success` or `error`
    pub status: ResponseStatus,

    /// HTTP status code mirrored in the body
    pub status_code: u16,

    /// Human-readable summary
    pub message: String,

    /// Non-fatal error that accompanied a successful outcome, or the failure cause
    pub any_error: Option<String>,

    /// Response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response carrying `data`
    pub fn success(status_code: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            status_code,
            message: message.into(),
            any_error: None,
            data: Some(data),
        }
    }

    /// Attach a non-fatal error to the response
    pub fn with_any_error(mut self, error: Option<String>) -> Self {
        self.any_error = error;
        self
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl ApiResponse<()> {
    /// Successful response without a payload
    pub fn message(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            status_code,
            message: message.into(),
            any_error: None,
            data: None,
        }
    }

    /// Create an error response
    pub fn error(status_code: u16, message: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            status_code,
            message: message.into(),
            any_error: Some(cause.into()),
            data: None,
        }
    }
}

/// Overall health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,

    /// Individual dependency checks (`true` = reachable)
    pub services: HashMap<String, bool>,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,

    /// Server version
    pub version: String,
}

impl HealthResponse {
    /// Build a health response; any failing dependency degrades the status
    pub fn from_checks(services: HashMap<String, bool>, version: impl Into<String>) -> Self {
        let status = if services.values().all(|ok| *ok) {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        };

        Self {
            status,
            services,
            timestamp: Utc::now(),
            version: version.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success(200, "ok", json!({"id": 1}));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["message"], "ok");
        assert!(value["anyError"].is_null());
        assert_eq!(value["data"]["id"], 1);
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let response = ApiResponse::error(404, "not found", "no such user");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], "error");
        assert_eq!(value["anyError"], "no such user");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_health_degraded_when_any_check_fails() {
        let mut checks = HashMap::new();
        checks.insert("redis".to_string(), true);
        checks.insert("postgres".to_string(), false);

        let health = HealthResponse::from_checks(checks, "0.1.0");
        assert_eq!(health.status, HealthStatus::Degraded);
    }
}
