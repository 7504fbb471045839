//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App,
};
use async_trait::async_trait;
use std::sync::Arc;

use shelf_api::app::{create_app, AppState};
use shelf_api::routes::health::{DependencyCheck, HealthChecks};
use shelf_core::domain::entities::token::Claims;
use shelf_core::domain::entities::user::User;
use shelf_core::repositories::MockUserRepository;
use shelf_core::services::token::{JwtTokenVerifier, TokenVerifier};
use shelf_core::services::user::UserService;
use shelf_core::services::verification::mock::{MockCodeCache, MockNotifier};
use shelf_core::services::verification::VerificationServiceConfig;
use shelf_shared::{AppConfig, AuthConfig};

pub const TEST_SECRET: &str = "integration-test-secret";

pub type TestState = AppState<MockUserRepository, MockCodeCache, MockNotifier>;

/// Probe with a fixed answer
pub struct StaticCheck {
    pub name: &'static str,
    pub healthy: bool,
}

#[async_trait]
impl DependencyCheck for StaticCheck {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn is_healthy(&self) -> bool {
        self.healthy
    }
}

/// Mocks behind one application instance
pub struct TestContext {
    pub repo: Arc<MockUserRepository>,
    pub cache: Arc<MockCodeCache>,
    pub notifier: Arc<MockNotifier>,
    pub verifier: Arc<JwtTokenVerifier>,
    pub state: web::Data<TestState>,
    pub health: web::Data<HealthChecks>,
    pub config: AppConfig,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_notifier(MockNotifier::new())
    }

    pub fn with_notifier(notifier: MockNotifier) -> Self {
        let repo = Arc::new(MockUserRepository::new());
        let cache = Arc::new(MockCodeCache::new());
        let notifier = Arc::new(notifier);

        let state = AppState::new(
            repo.clone(),
            cache.clone(),
            notifier.clone(),
            VerificationServiceConfig::default(),
        )
        .with_user_service(UserService::new(repo.clone()).with_hash_cost(4));

        let config = AppConfig {
            auth: AuthConfig::new(TEST_SECRET),
            ..AppConfig::development()
        };

        let health = HealthChecks::new().with(Arc::new(StaticCheck {
            name: "redis",
            healthy: true,
        }));

        Self {
            repo,
            cache,
            notifier,
            verifier: Arc::new(JwtTokenVerifier::new(&config.auth)),
            state: web::Data::new(state),
            health: web::Data::new(health),
            config,
        }
    }

    pub fn with_health(mut self, health: HealthChecks) -> Self {
        self.health = web::Data::new(health);
        self
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let verifier: Arc<dyn TokenVerifier> = self.verifier.clone();
        create_app(
            self.state.clone(),
            web::Data::new(verifier),
            self.health.clone(),
            &self.config,
        )
    }

    /// Insert an account and return it with its assigned id
    pub async fn add_user(&self, email: &str, is_admin: bool) -> User {
        let mut user = User::new(
            "Doe",
            "Jane",
            email,
            "08012345678",
            "1 Shelf Road",
            "$2b$04$placeholderplaceholderplaceholderplaceholderplacehol",
        );
        user.is_admin = is_admin;
        self.repo.insert(user).await
    }

    /// `Authorization` header value for `user_id`
    pub fn bearer(&self, user_id: i64, role: &str) -> String {
        let token = self
            .verifier
            .sign(&Claims::new(user_id, role, 60))
            .unwrap();
        format!("Bearer {}", token)
    }
}
