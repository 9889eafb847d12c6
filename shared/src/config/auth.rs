//! Session signing and OAuth configuration

use serde::{Deserialize, Serialize};

/// JWT session token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing session tokens
    pub secret: String,

    /// Session token time-to-live in seconds
    pub ttl_seconds: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("change-me-in-production"),
            ttl_seconds: 86_400, // 24 hours
            issuer: String::from("lexvault"),
            audience: String::from("lexvault-web"),
        }
    }
}

impl JwtConfig {
    /// Create a new configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| "change-me-in-production".to_string());
        let ttl_seconds = std::env::var("JWT_TTL_SECONDS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .unwrap_or(86_400);

        Self {
            secret,
            ttl_seconds,
            ..Default::default()
        }
    }

    /// Check if the placeholder secret is still in use
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "change-me-in-production"
    }
}

/// Google OAuth client configuration for federated login
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoogleOAuthConfig {
    /// OAuth client ID
    pub client_id: String,

    /// OAuth client secret
    pub client_secret: String,

    /// Redirect URI registered with the provider
    pub redirect_uri: String,
}

impl GoogleOAuthConfig {
    /// Create from environment variables
    ///
    /// Returns `None` when the client ID or secret is not set; federated
    /// login is disabled in that case.
    pub fn from_env() -> Option<Self> {
        let client_id = std::env::var("GOOGLE_CLIENT_ID").ok()?;
        let client_secret = std::env::var("GOOGLE_CLIENT_SECRET").ok()?;
        let redirect_uri = std::env::var("GOOGLE_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:8080/auth/google/callback".to_string());

        Some(Self {
            client_id,
            client_secret,
            redirect_uri,
        })
    }
}
