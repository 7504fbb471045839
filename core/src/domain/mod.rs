//! Domain layer containing business entities.

pub mod entities;

pub use entities::{
    generate_code, AuthIdentity, Claims, OneTimeCode, ProfileUpdate, Role, User, CODE_LENGTH,
    DEFAULT_EXPIRATION_MINUTES,
};
