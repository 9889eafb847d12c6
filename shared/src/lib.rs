//! Shared configuration types for the LexVault server
//!
//! This crate holds the typed configuration used across all server crates.
//! Values are loaded from environment variables; defaults are suitable for
//! local development only.

pub mod config;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, Environment, GoogleOAuthConfig, JwtConfig, RateLimitConfig,
    ServerConfig,
};
