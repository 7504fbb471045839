//! Business services containing domain logic and use cases.

pub mod token;
pub mod user;
pub mod verification;

pub use token::{JwtTokenVerifier, TokenVerifier};
pub use user::UserService;
pub use verification::{
    CodeCacheTrait, NotifierTrait, VerificationOutcome, VerificationService,
    VerificationServiceConfig,
};
