//! Account management: listing, profile lookups, updates and deactivation

mod password;
mod service;

#[cfg(test)]
mod tests;

pub use password::{hash_password, verify_password};
pub use service::UserService;
