//! JWT authentication middleware
//!
//! Extracts the bearer token from the Authorization header, verifies it
//! through the core token service and injects an [`AuthContext`] into the
//! request extensions. Handlers read the session through the extractor and
//! never trust a client-supplied identity without it.
//!
//! Sessions renew implicitly: every response to an authenticated request
//! carries a re-issued token in the `X-Session-Token` header, so a session
//! only expires after a full TTL of inactivity.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::{HeaderName, HeaderValue, AUTHORIZATION},
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use serde_json::json;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};
use uuid::Uuid;

use lex_core::domain::entities::token::Claims;
use lex_core::services::TokenService;

/// Authenticated session data injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// User ID from the token's subject claim
    pub user_id: Uuid,
    /// Email bound to the session
    pub email: String,
    /// Token ID
    pub jti: String,
}

impl AuthContext {
    fn from_claims(claims: Claims) -> Option<Self> {
        let user_id = claims.user_id().ok()?;
        Some(Self {
            user_id,
            email: claims.email,
            jti: claims.jti,
        })
    }
}

/// JWT authentication middleware factory
pub struct JwtAuth {
    tokens: Arc<TokenService>,
}

impl JwtAuth {
    /// Create the middleware around a token service
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
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
            tokens: self.tokens.clone(),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    tokens: Arc<TokenService>,
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

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let tokens = self.tokens.clone();

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Ok(req
                        .into_response(unauthorized_response("Missing Authorization header"))
                        .map_into_right_body())
                }
            };

            let claims = match tokens.verify(&token) {
                Ok(claims) => claims,
                Err(_) => {
                    return Ok(req
                        .into_response(unauthorized_response("Invalid or expired session"))
                        .map_into_right_body())
                }
            };

            // Renew before the claims move into the context; a renewal
            // failure must not fail the request itself
            let renewed = tokens.renew(&claims).ok();

            let context = match AuthContext::from_claims(claims) {
                Some(context) => context,
                None => {
                    return Ok(req
                        .into_response(unauthorized_response("Invalid or expired session"))
                        .map_into_right_body())
                }
            };

            req.extensions_mut().insert(context);
            let mut res = service.call(req).await?;

            if let Some(renewed) = renewed {
                if let Ok(value) = HeaderValue::from_str(&renewed.token) {
                    res.headers_mut()
                        .insert(HeaderName::from_static("x-session-token"), value);
                }
            }

            Ok(res.map_into_left_body())
        })
    }
}

fn unauthorized_response(message: &str) -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({ "error": message }))
}

fn unauthorized(message: &str) -> Error {
    InternalError::from_response("unauthorized", unauthorized_response(message)).into()
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| unauthorized("Authentication required"));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_bearer_token() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer token-123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), Some("token-123".to_string()));

        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "token-123"))
            .to_srv_request();
        assert_eq!(extract_bearer_token(&req), None);

        let req = TestRequest::default().to_srv_request();
        assert_eq!(extract_bearer_token(&req), None);
    }
}
