//! Application state and route wiring
//!
//! `configure` assembles the whole HTTP surface over any repository pair,
//! so the binary wires MySQL implementations while HTTP tests wire the
//! in-memory mocks.

use actix_web::{web, HttpResponse};
use serde_json::json;
use std::sync::Arc;

use lex_core::repositories::{HistoryRepository, UserRepository};
use lex_core::services::{AuthService, HistoryService, SlidingWindowLimiter, TokenService};
use lex_shared::config::RateLimitConfig;

use crate::middleware::{JwtAuth, RateLimiter};
use crate::routes::auth::{google, login, signup};
use crate::routes::word;

/// Shared services handed to every handler
pub struct AppState<U: UserRepository, H: HistoryRepository> {
    pub auth_service: Arc<AuthService<U>>,
    pub history_service: Arc<HistoryService<H>>,
    pub token_service: Arc<TokenService>,
}

/// Builds the route configuration for the given services
///
/// `oauth_enabled` controls whether the federated login routes are
/// mounted; the rate limiter guards every path under the configured
/// prefix and runs before JWT verification, so rejected requests are
/// counted whether or not they carry a valid session.
pub fn configure<U, H>(
    state: web::Data<AppState<U, H>>,
    limiter: Arc<SlidingWindowLimiter>,
    rate_config: RateLimitConfig,
    oauth_enabled: bool,
) -> impl FnOnce(&mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    H: HistoryRepository + 'static,
{
    move |cfg: &mut web::ServiceConfig| {
        let token_service = state.token_service.clone();

        let mut auth_scope = web::scope("/auth")
            .route("/signup", web::post().to(signup::signup::<U, H>))
            .route("/login", web::post().to(login::login::<U, H>));
        if oauth_enabled {
            auth_scope = auth_scope
                .route("/google", web::get().to(google::authorize::<U, H>))
                .route("/google/callback", web::get().to(google::callback::<U, H>));
        }

        // wrap() nests outward: the limiter registered last runs first
        let api_scope = web::scope("/api")
            .route("/word", web::post().to(word::save_word::<U, H>))
            .route("/word", web::get().to(word::get_words::<U, H>))
            .wrap(JwtAuth::new(token_service))
            .wrap(RateLimiter::new(limiter, rate_config));

        cfg.app_data(state)
            .route("/health", web::get().to(health_check))
            .service(auth_scope)
            .service(api_scope)
            .default_service(web::route().to(not_found));
    }
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "lexvault-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
