//! Infrastructure layer for the LexVault backend
//!
//! Concrete implementations of the core repository and provider traits:
//! MySQL persistence via SQLx and the Google OAuth HTTP client.

pub mod database;
pub mod oauth;

use thiserror::Error;

/// Infrastructure-level errors raised before a domain mapping applies
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub use database::connection::DatabasePool;
pub use database::mysql::{MySqlHistoryRepository, MySqlUserRepository};
pub use oauth::google::GoogleOAuthClient;
