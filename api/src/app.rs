//! Application state and factory
//!
//! This module holds the shared application state and the factory that
//! builds the Actix-web application, so the binary and the integration tests
//! assemble exactly the same routes and middleware.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

use shelf_core::repositories::UserRepository;
use shelf_core::services::user::UserService;
use shelf_core::services::verification::{
    CodeCacheTrait, NotifierTrait, VerificationService, VerificationServiceConfig,
};
use shelf_shared::{ApiResponse, AppConfig};

use crate::handlers::ApiError;
use crate::middleware::{create_cors, SharedTokenVerifier};
use crate::routes::health::{health_check, HealthChecks};
use crate::routes::users;

/// Application state that holds shared services
pub struct AppState<U, C, N>
where
    U: UserRepository,
    C: CodeCacheTrait,
    N: NotifierTrait + ?Sized,
{
    pub verification_service: Arc<VerificationService<U, C, N>>,
    pub user_service: Arc<UserService<U>>,
}

impl<U, C, N> AppState<U, C, N>
where
    U: UserRepository,
    C: CodeCacheTrait,
    N: NotifierTrait + ?Sized + 'static,
{
    /// Build both services over one repository
    pub fn new(
        user_repository: Arc<U>,
        cache: Arc<C>,
        notifier: Arc<N>,
        verification: VerificationServiceConfig,
    ) -> Self {
        Self {
            verification_service: Arc::new(VerificationService::new(
                Arc::clone(&user_repository),
                cache,
                notifier,
                verification,
            )),
            user_service: Arc::new(UserService::new(user_repository)),
        }
    }

    /// Replace the account service, e.g. to lower the bcrypt cost in tests
    pub fn with_user_service(mut self, user_service: UserService<U>) -> Self {
        self.user_service = Arc::new(user_service);
        self
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, C, N>(
    app_state: web::Data<AppState<U, C, N>>,
    token_verifier: SharedTokenVerifier,
    health_checks: web::Data<HealthChecks>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    C: CodeCacheTrait + 'static,
    N: NotifierTrait + ?Sized + 'static,
{
    // Malformed bodies and query strings get the same envelope as domain errors
    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into());
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::bad_request(err.to_string()).into());

    App::new()
        .app_data(app_state)
        .app_data(token_verifier)
        .app_data(health_checks)
        .app_data(json_config)
        .app_data(query_config)
        // Logger outermost so CORS rejections are traced too
        .wrap(create_cors(&config.server, config.environment))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .configure(users::configure::<U, C, N>)
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error(
        404,
        "resource not found",
        "The requested resource was not found",
    ))
}
