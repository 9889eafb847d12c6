//! Per-client rate limiting middleware
//!
//! Applies the core sliding-window limiter to every request whose path
//! falls under the configured prefix. The client key is the first hop of
//! `X-Forwarded-For`, then `X-Real-IP`, then the peer address; requests
//! with none of these share a single sentinel bucket.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use serde_json::json;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use lex_core::services::{Decision, SlidingWindowLimiter};
use lex_shared::config::RateLimitConfig;

/// Rate limiting middleware factory
pub struct RateLimiter {
    limiter: Arc<SlidingWindowLimiter>,
    config: RateLimitConfig,
}

impl RateLimiter {
    /// Create the middleware around a shared limiter
    pub fn new(limiter: Arc<SlidingWindowLimiter>, config: RateLimitConfig) -> Self {
        Self { limiter, config }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimiter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimiterMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimiterMiddleware {
            service: Rc::new(service),
            limiter: self.limiter.clone(),
            config: self.config.clone(),
        }))
    }
}

/// Rate limiting middleware service
pub struct RateLimiterMiddleware<S> {
    service: Rc<S>,
    limiter: Arc<SlidingWindowLimiter>,
    config: RateLimitConfig,
}

impl<S, B> Service<ServiceRequest> for RateLimiterMiddleware<S>
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
        let limiter = self.limiter.clone();
        let config = self.config.clone();

        Box::pin(async move {
            if !config.enabled || !req.path().starts_with(&config.path_prefix) {
                return service.call(req).await.map(|res| res.map_into_left_body());
            }

            let client_key = get_client_key(&req);
            let now_ms = chrono::Utc::now().timestamp_millis();

            match limiter.check(&client_key, now_ms) {
                Decision::Admitted { .. } => {
                    service.call(req).await.map(|res| res.map_into_left_body())
                }
                Decision::Rejected { retry_after_ms } => {
                    log::warn!("rate limit exceeded for client {}", client_key);

                    let retry_after_secs = (retry_after_ms as f64 / 1000.0).ceil() as i64;
                    let response = HttpResponse::TooManyRequests()
                        .insert_header(("Retry-After", retry_after_secs.to_string()))
                        .json(json!({"error": "Too many requests"}));
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Resolve the client identity a bucket is keyed by
fn get_client_key(req: &ServiceRequest) -> String {
    if let Some(forwarded_for) = req.headers().get("X-Forwarded-For") {
        if let Ok(forwarded_str) = forwarded_for.to_str() {
            if let Some(ip) = forwarded_str.split(',').next() {
                let ip = ip.trim();
                if !ip.is_empty() {
                    return ip.to_string();
                }
            }
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP") {
        if let Ok(ip_str) = real_ip.to_str() {
            return ip_str.to_string();
        }
    }

    req.connection_info()
        .peer_addr()
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_forwarded_for_takes_first_hop() {
        let req = TestRequest::default()
            .insert_header(("X-Forwarded-For", "203.0.113.9, 10.0.0.1"))
            .to_srv_request();
        assert_eq!(get_client_key(&req), "203.0.113.9");
    }

    #[test]
    fn test_real_ip_is_second_choice() {
        let req = TestRequest::default()
            .insert_header(("X-Real-IP", "198.51.100.7"))
            .to_srv_request();
        assert_eq!(get_client_key(&req), "198.51.100.7");
    }

    #[test]
    fn test_missing_address_uses_sentinel() {
        let req = TestRequest::default().to_srv_request();
        assert_eq!(get_client_key(&req), "unknown");
    }
}
