use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;

use shelf_api::app::{create_app, AppState};
use shelf_api::config::load_config;
use shelf_api::routes::health::HealthChecks;
use shelf_api::telemetry::init_tracing;
use shelf_core::services::token::{JwtTokenVerifier, TokenVerifier};
use shelf_core::services::verification::VerificationServiceConfig;
use shelf_infra::cache::RedisVerificationCache;
use shelf_infra::database::{DatabasePool, PgUserRepository};
use shelf_infra::mail::create_notifier;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("failed to load configuration")?;
    init_tracing(&config.logging);

    tracing::info!(
        environment = %config.environment,
        version = env!("CARGO_PKG_VERSION"),
        "Starting Shelf API server"
    );

    if config.auth.is_using_default_secret() {
        tracing::warn!("Using the built-in token secret; set APP__AUTH__SECRET");
    }

    let database = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to PostgreSQL")?;
    if config.database.run_migrations {
        database
            .run_migrations()
            .await
            .context("failed to run database migrations")?;
    }

    let user_repository = Arc::new(PgUserRepository::new(database.get_pool().clone()));
    let code_cache = RedisVerificationCache::connect(config.cache.clone())
        .await
        .context("failed to connect to Redis")?;
    let notifier =
        create_notifier(&config.mail).context("failed to configure the mail notifier")?;

    let health_checks = web::Data::new(
        HealthChecks::new()
            .with(Arc::new(code_cache.client().clone()))
            .with(Arc::new(database.clone())),
    );

    let app_state = web::Data::new(AppState::new(
        user_repository,
        Arc::new(code_cache),
        notifier,
        VerificationServiceConfig::from(&config.verification),
    ));

    let token_verifier: Arc<dyn TokenVerifier> = Arc::new(JwtTokenVerifier::new(&config.auth));
    let token_verifier = web::Data::new(token_verifier);

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Binding HTTP server");

    let app_config = config.clone();
    let mut server = HttpServer::new(move || {
        create_app(
            app_state.clone(),
            token_verifier.clone(),
            health_checks.clone(),
            &app_config,
        )
    })
    .keep_alive(Duration::from_secs(config.server.keep_alive))
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {}", bind_address))?;

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.run().await.context("HTTP server failed")?;

    tracing::info!("Server stopped, closing connections");
    database.close().await;

    Ok(())
}
