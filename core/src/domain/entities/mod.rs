//! Domain entities representing core business objects.

pub mod token;
pub mod user;
pub mod verification_code;

pub use token::{AuthIdentity, Claims, Role};
pub use user::{ProfileUpdate, User};
pub use verification_code::{
    generate_code, OneTimeCode, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES,
};
