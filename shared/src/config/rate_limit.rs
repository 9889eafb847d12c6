//! Rate limiting configuration module

use serde::{Deserialize, Serialize};

/// Sliding-window rate limiting configuration for API routes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Window length in milliseconds
    pub window_ms: i64,

    /// Maximum admitted requests per client key per window
    pub max_requests: u32,

    /// Only requests whose path starts with this prefix are gated
    pub path_prefix: String,

    /// Upper bound on tracked client buckets before stale ones are swept
    pub max_buckets: usize,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            window_ms: 60_000,
            max_requests: 50,
            path_prefix: String::from("/api"),
            max_buckets: 10_000,
        }
    }
}

impl RateLimitConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let window_ms = std::env::var("RATE_LIMIT_WINDOW_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.window_ms);
        let max_requests = std::env::var("RATE_LIMIT_MAX_REQUESTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_requests);
        let max_buckets = std::env::var("RATE_LIMIT_MAX_BUCKETS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_buckets);

        Self {
            window_ms,
            max_requests,
            max_buckets,
            ..defaults
        }
    }
}

fn default_enabled() -> bool {
    true
}
