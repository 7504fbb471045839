//! CORS middleware configuration for cross-origin requests.
//!
//! Origins come from `server.allowed_origins`. Outside production an empty
//! list means any origin is accepted; in production an empty list accepts no
//! cross-origin requests at all.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use shelf_shared::{Environment, ServerConfig};

/// Max age for the preflight cache, in seconds
const PREFLIGHT_MAX_AGE: usize = 3600;

/// Creates a CORS middleware instance for the given environment.
pub fn create_cors(server: &ServerConfig, environment: Environment) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(PREFLIGHT_MAX_AGE);

    if server.allowed_origins.is_empty() {
        if environment.is_production() {
            tracing::warn!("No CORS origins configured; cross-origin requests will be refused");
            return cors;
        }
        tracing::info!("Configuring permissive CORS for {} environment", environment);
        return cors.allow_any_origin();
    }

    server
        .allowed_origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .fold(cors, |cors, origin| {
            tracing::info!("Adding allowed origin: {}", origin);
            cors.allowed_origin(origin)
        })
}
