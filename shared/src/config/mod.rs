//! Configuration module organized by concern
//!
//! - `auth` - JWT session signing and Google OAuth credentials
//! - `database` - MySQL connection and pool configuration
//! - `environment` - Environment detection
//! - `rate_limit` - Sliding-window rate limiting for API routes
//! - `server` - HTTP server bind configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod rate_limit;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{GoogleOAuthConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use rate_limit::RateLimitConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment the server runs in
    pub environment: Environment,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// JWT session token configuration
    pub jwt: JwtConfig,

    /// Google OAuth configuration; federated login is disabled when absent
    #[serde(default)]
    pub google_oauth: Option<GoogleOAuthConfig>,

    /// Rate limiting configuration
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            google_oauth: GoogleOAuthConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
        }
    }

    /// Check if running in development
    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
            google_oauth: None,
            rate_limit: RateLimitConfig::default(),
        }
    }
}
