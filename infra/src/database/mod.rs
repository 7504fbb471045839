//! Database module - PostgreSQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management
//! - Embedded migrations
//! - The PostgreSQL user repository

pub mod connection;
pub mod postgres;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use postgres::PgUserRepository;
pub use shelf_shared::config::DatabaseConfig;
