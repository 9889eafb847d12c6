//! LexVault API server binary
//!
//! Loads configuration, connects MySQL, wires the services and serves the
//! HTTP surface.

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use lex_api::app::{self, AppState};
use lex_api::middleware::cors;
use lex_core::services::{AuthService, HistoryService, SlidingWindowLimiter, TokenService};
use lex_infra::{DatabasePool, GoogleOAuthClient, MySqlHistoryRepository, MySqlUserRepository};
use lex_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    log::info!("Starting LexVault API server ({:?})", config.environment);

    if config.is_production() && config.jwt.is_using_default_secret() {
        anyhow::bail!("JWT_SECRET must be set in production");
    }

    let pool = DatabasePool::new(&config.database)
        .await
        .context("database connection failed")?;
    pool.ensure_schema()
        .await
        .context("schema bootstrap failed")?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.inner().clone()));
    let history_repository = Arc::new(MySqlHistoryRepository::new(pool.inner().clone()));

    let token_service = Arc::new(TokenService::new(config.jwt.clone()));
    let mut auth_service = AuthService::new(user_repository, token_service.clone());

    let oauth_enabled = config.google_oauth.is_some();
    if let Some(oauth_config) = config.google_oauth.clone() {
        let client =
            GoogleOAuthClient::new(oauth_config).context("OAuth client initialization failed")?;
        auth_service = auth_service.with_oauth(Arc::new(client));
        log::info!("federated login enabled");
    } else {
        log::info!("GOOGLE_CLIENT_ID/SECRET not set; federated login disabled");
    }

    let auth_service = Arc::new(auth_service);
    let history_service = Arc::new(HistoryService::new(history_repository));
    let limiter = Arc::new(SlidingWindowLimiter::new(config.rate_limit.clone()));

    let bind_address = config.server.bind_address();
    log::info!("Server listening on {}", bind_address);

    let environment = config.environment;
    let rate_config = config.rate_limit.clone();

    HttpServer::new(move || {
        let state = web::Data::new(AppState {
            auth_service: auth_service.clone(),
            history_service: history_service.clone(),
            token_service: token_service.clone(),
        });

        App::new()
            .wrap(Logger::default())
            .wrap(cors::create_cors(&environment))
            .configure(app::configure(
                state,
                limiter.clone(),
                rate_config.clone(),
                oauth_enabled,
            ))
    })
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {bind_address}"))?
    .run()
    .await
    .context("server terminated with an error")
}
