pub mod auth;
pub mod cors;

pub use auth::{AuthContext, JwtAuth, SharedTokenVerifier};
pub use cors::create_cors;
