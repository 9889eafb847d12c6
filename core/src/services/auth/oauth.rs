//! External identity provider seam
//!
//! The OAuth protocol itself is handled by an external provider; the core
//! only consumes the identity it hands back after a code exchange.

use async_trait::async_trait;

use crate::errors::DomainResult;

/// Identity returned by the provider after a successful code exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthIdentity {
    /// Verified email address supplied by the provider
    pub email: String,

    /// Display name supplied by the provider, if any
    pub name: Option<String>,
}

/// Trait implemented by identity provider clients
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// URL the browser is redirected to for consent, carrying the CSRF state
    fn authorize_url(&self, state: &str) -> String;

    /// Exchange an authorization code for the user's identity
    async fn exchange_code(&self, code: &str) -> DomainResult<OAuthIdentity>;
}
