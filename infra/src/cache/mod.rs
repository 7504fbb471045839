//! Cache module for Redis-based caching
//!
//! Holds the Redis client with its retry logic and the verification code
//! store built on top of it.

pub mod redis_client;
pub mod verification_cache;

#[cfg(test)]
mod tests;

pub use redis_client::RedisClient;
pub use verification_cache::RedisVerificationCache;

// Re-export commonly used types
pub use shelf_shared::config::CacheConfig;
