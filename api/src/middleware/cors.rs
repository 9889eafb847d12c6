//! CORS configuration for the browser client
//!
//! Development allows any origin for local testing; production restricts
//! origins to the `ALLOWED_ORIGINS` list.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

use lex_shared::config::Environment;

/// Creates a CORS middleware instance for the current environment
pub fn create_cors(environment: &Environment) -> Cors {
    match environment {
        Environment::Production => create_production_cors(),
        Environment::Development => create_development_cors(),
    }
}

fn create_development_cors() -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(3600)
}

fn create_production_cors() -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600);

    if let Ok(allowed_origins) = env::var("ALLOWED_ORIGINS") {
        for origin in allowed_origins.split(',').map(|s| s.trim()) {
            if !origin.is_empty() {
                log::info!("Adding allowed origin: {}", origin);
                cors = cors.allowed_origin(origin);
            }
        }
    }

    cors
}
