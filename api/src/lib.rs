//! # Shelf API
//!
//! HTTP surface of the Shelf backend: the `/users` routes, bearer-token
//! middleware, configuration loading and tracing setup.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;
