//! Liveness endpoint reporting the reachability of backing services

use actix_web::{web, HttpResponse};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use shelf_infra::cache::RedisClient;
use shelf_infra::database::DatabasePool;
use shelf_shared::types::HealthResponse;

/// A backing service that can be probed
#[async_trait]
pub trait DependencyCheck: Send + Sync {
    /// Key used in the `services` map
    fn name(&self) -> &'static str;

    async fn is_healthy(&self) -> bool;
}

#[async_trait]
impl DependencyCheck for RedisClient {
    fn name(&self) -> &'static str {
        "redis"
    }

    async fn is_healthy(&self) -> bool {
        self.health_check().await.unwrap_or(false)
    }
}

#[async_trait]
impl DependencyCheck for DatabasePool {
    fn name(&self) -> &'static str {
        "database"
    }

    async fn is_healthy(&self) -> bool {
        self.health_check().await.unwrap_or(false)
    }
}

/// Probes run by `GET /health`
#[derive(Clone, Default)]
pub struct HealthChecks {
    checks: Vec<Arc<dyn DependencyCheck>>,
}

impl HealthChecks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, check: Arc<dyn DependencyCheck>) -> Self {
        self.checks.push(check);
        self
    }

    async fn run(&self) -> HashMap<String, bool> {
        let mut results = HashMap::with_capacity(self.checks.len());
        for check in &self.checks {
            results.insert(check.name().to_string(), check.is_healthy().await);
        }
        results
    }
}

/// Health check endpoint handler
///
/// Always answers 200 while the process is serving; a failing dependency
/// shows up as `"status": "degraded"`.
pub async fn health_check(checks: web::Data<HealthChecks>) -> HttpResponse {
    let services = checks.run().await;
    let response = HealthResponse::from_checks(services, env!("CARGO_PKG_VERSION"));

    if !response.services.values().all(|ok| *ok) {
        tracing::warn!(services = ?response.services, "Health check degraded");
    }

    HttpResponse::Ok().json(response)
}
