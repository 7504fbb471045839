//! Limit/offset pagination for list endpoints

use serde::{Deserialize, Serialize};

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

/// Pagination parameters, bound from `?limit=&offset=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Maximum number of rows to return
    #[serde(default = "default_limit")]
    pub limit: i64,

    /// Number of rows to skip
    #[serde(default)]
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Pagination {
    /// Create a new pagination, clamped to sane bounds
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }.validate()
    }

    /// Validate and sanitize pagination parameters
    pub fn validate(mut self) -> Self {
        self.limit = self.limit.clamp(1, MAX_LIMIT);
        self.offset = self.offset.max(0);
        self
    }
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}
