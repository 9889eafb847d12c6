//! Google OAuth 2.0 client
//!
//! Implements the authorization-code flow against Google's endpoints:
//! the consent URL carries the caller's CSRF state, and the callback
//! code is exchanged server-side for an access token that is then used
//! to fetch the user's profile. Only the verified email and display
//! name leave this module.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, error};

use lex_core::errors::{AuthError, DomainError, DomainResult};
use lex_core::services::{OAuthIdentity, OAuthProvider};
use lex_shared::config::GoogleOAuthConfig;

use crate::InfrastructureError;

const AUTHORIZE_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const USERINFO_ENDPOINT: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Token endpoint response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Userinfo endpoint response; fields beyond these are ignored
#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    email: String,
    name: Option<String>,
}

/// Google OAuth client implementing the core provider trait
pub struct GoogleOAuthClient {
    client: reqwest::Client,
    config: GoogleOAuthConfig,
}

impl GoogleOAuthClient {
    /// Create a new client from configuration
    pub fn new(config: GoogleOAuthConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                InfrastructureError::Config(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl OAuthProvider for GoogleOAuthClient {
    fn authorize_url(&self, state: &str) -> String {
        // Url::parse_with_params percent-encodes every parameter
        let url = Url::parse_with_params(
            AUTHORIZE_ENDPOINT,
            &[
                ("client_id", self.config.client_id.as_str()),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("response_type", "code"),
                ("scope", "openid email profile"),
                ("state", state),
            ],
        )
        .expect("authorize endpoint is a valid base URL");

        url.into()
    }

    async fn exchange_code(&self, code: &str) -> DomainResult<OAuthIdentity> {
        let response = self
            .client
            .post(TOKEN_ENDPOINT)
            .form(&[
                ("code", code),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("Token exchange request failed: {}", e);
                DomainError::Auth(AuthError::OAuthExchange {
                    message: format!("token request failed: {e}"),
                })
            })?;

        if !response.status().is_success() {
            let status = response.status();
            error!("Token exchange rejected with status {}", status);
            return Err(DomainError::Auth(AuthError::OAuthExchange {
                message: format!("token endpoint returned {status}"),
            }));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            DomainError::Auth(AuthError::OAuthExchange {
                message: format!("malformed token response: {e}"),
            })
        })?;

        let profile = self
            .client
            .get(USERINFO_ENDPOINT)
            .bearer_auth(&token.access_token)
            .send()
            .await
            .map_err(|e| {
                error!("Userinfo request failed: {}", e);
                DomainError::Auth(AuthError::OAuthExchange {
                    message: format!("userinfo request failed: {e}"),
                })
            })?;

        if !profile.status().is_success() {
            let status = profile.status();
            return Err(DomainError::Auth(AuthError::OAuthExchange {
                message: format!("userinfo endpoint returned {status}"),
            }));
        }

        let info: UserInfoResponse = profile.json().await.map_err(|e| {
            DomainError::Auth(AuthError::OAuthExchange {
                message: format!("malformed userinfo response: {e}"),
            })
        })?;

        debug!("code exchange completed for a federated login");
        Ok(OAuthIdentity {
            email: info.email,
            name: info.name,
        })
    }
}
