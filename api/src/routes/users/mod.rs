//! `/users` routes
//!
//! The two code endpoints are public; everything else sits behind
//! [`JwtAuth`](crate::middleware::JwtAuth).

pub mod deactivate;
pub mod list_users;
pub mod profile;
pub mod send_code;
pub mod update;
pub mod verify_code;

use actix_web::web;

use shelf_core::repositories::UserRepository;
use shelf_core::services::verification::{CodeCacheTrait, NotifierTrait};

use crate::middleware::JwtAuth;

pub use deactivate::deactivate;
pub use list_users::list_users;
pub use profile::{get_email, profile};
pub use send_code::send_code;
pub use update::{update_password, update_user};
pub use verify_code::verify_code;

/// Register the `/users` scope
pub fn configure<U, C, N>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    C: CodeCacheTrait + 'static,
    N: NotifierTrait + ?Sized + 'static,
{
    cfg.service(
        web::scope("/users")
            .route("/send_code_to_user", web::get().to(send_code::<U, C, N>))
            .route("/verify_code", web::post().to(verify_code::<U, C, N>))
            .service(
                web::resource("/allUsers")
                    .wrap(JwtAuth::new())
                    .route(web::get().to(list_users::<U, C, N>)),
            )
            .service(
                web::resource("/update")
                    .wrap(JwtAuth::new())
                    .route(web::put().to(update_user::<U, C, N>)),
            )
            .service(
                web::resource("/update/password")
                    .wrap(JwtAuth::new())
                    .route(web::put().to(update_password::<U, C, N>)),
            )
            .service(
                web::resource("/deactivate")
                    .wrap(JwtAuth::new())
                    .route(web::delete().to(deactivate::<U, C, N>)),
            )
            .service(
                web::resource("/profile")
                    .wrap(JwtAuth::new())
                    .route(web::get().to(profile::<U, C, N>)),
            )
            .service(
                web::resource("/get_email")
                    .wrap(JwtAuth::new())
                    .route(web::get().to(get_email::<U, C, N>)),
            ),
    );
}
