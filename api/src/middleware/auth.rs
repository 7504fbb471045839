//! Bearer token authentication middleware for protected endpoints.
//!
//! The middleware extracts the token from the `Authorization` header,
//! verifies it with the `TokenVerifier` registered as app data, and injects
//! an `AuthContext` into the request. Failures are answered with the standard
//! 401 JSON envelope before the handler runs.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use shelf_core::domain::entities::token::{AuthIdentity, Role};
use shelf_core::errors::{DomainError, TokenError};
use shelf_core::services::token::TokenVerifier;

use crate::handlers::ApiError;

/// Verifier handle shared through app data
pub type SharedTokenVerifier = web::Data<Arc<dyn TokenVerifier>>;

/// Authenticated caller injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Account id from the token subject
    pub user_id: i64,
    /// Role derived from the token's role claim
    pub role: Role,
}

impl AuthContext {
    /// Identity used by the service layer
    pub fn identity(&self) -> AuthIdentity {
        AuthIdentity::new(self.user_id, self.role)
    }
}

impl From<AuthIdentity> for AuthContext {
    fn from(identity: AuthIdentity) -> Self {
        Self {
            user_id: identity.user_id,
            role: identity.role,
        }
    }
}

/// Bearer token authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Bearer token authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            match authenticate(&req) {
                Ok(context) => {
                    req.extensions_mut().insert(context);
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Err(error) => {
                    tracing::info!(
                        path = %req.path(),
                        error = %error,
                        event = "auth_rejected",
                        "Rejected unauthenticated request"
                    );
                    let response = ApiError::from(error).error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Verify the request's bearer token
fn authenticate(req: &ServiceRequest) -> Result<AuthContext, DomainError> {
    let token = extract_bearer_token(req).ok_or(TokenError::MissingToken)?;

    let verifier = req.app_data::<SharedTokenVerifier>().ok_or_else(|| DomainError::Internal {
        message: "token verification not configured".to_string(),
    })?;

    verifier.verify(&token).map(AuthContext::from)
}

/// Extracts the token from an `Authorization: Bearer <token>` header
pub(crate) fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = header.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result: Result<Self, Self::Error> = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::from(DomainError::unauthorized("authentication required")).into());

        ready(result)
    }
}
