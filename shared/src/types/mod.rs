//! Type definitions shared by the HTTP layer
//!
//! - `pagination` - Limit/offset pagination for list endpoints
//! - `response` - API response envelope and health checks

pub mod pagination;
pub mod response;

pub use pagination::Pagination;
pub use response::{ApiResponse, HealthResponse, HealthStatus, ResponseStatus};
