//! Shared harness for HTTP-level tests: the full route surface wired with
//! the in-memory repositories.

use actix_web::web;
use async_trait::async_trait;
use std::sync::Arc;

use lex_api::app::AppState;
use lex_core::errors::{AuthError, DomainResult};
use lex_core::repositories::{MockHistoryRepository, MockUserRepository};
use lex_core::services::{
    AuthService, HistoryService, OAuthIdentity, OAuthProvider, SlidingWindowLimiter, TokenService,
};
use lex_shared::config::{JwtConfig, RateLimitConfig};

pub type TestState = web::Data<AppState<MockUserRepository, MockHistoryRepository>>;

pub struct TestHarness {
    pub state: TestState,
    pub limiter: Arc<SlidingWindowLimiter>,
    pub rate_config: RateLimitConfig,
}

/// Provider stub accepting exactly one code
pub struct FakeProvider {
    pub identity: OAuthIdentity,
}

#[async_trait]
impl OAuthProvider for FakeProvider {
    fn authorize_url(&self, state: &str) -> String {
        format!("https://provider.test/consent?state={state}")
    }

    async fn exchange_code(&self, code: &str) -> DomainResult<OAuthIdentity> {
        if code == "good-code" {
            Ok(self.identity.clone())
        } else {
            Err(AuthError::OAuthExchange {
                message: "invalid code".to_string(),
            }
            .into())
        }
    }
}

pub fn harness() -> TestHarness {
    build(RateLimitConfig::default(), None)
}

pub fn harness_with_rate_limit(rate_config: RateLimitConfig) -> TestHarness {
    build(rate_config, None)
}

pub fn harness_with_oauth(provider: FakeProvider) -> TestHarness {
    build(RateLimitConfig::default(), Some(Arc::new(provider)))
}

fn build(rate_config: RateLimitConfig, provider: Option<Arc<FakeProvider>>) -> TestHarness {
    let tokens = Arc::new(TokenService::new(JwtConfig::new("http-test-secret")));

    let mut auth = AuthService::new(Arc::new(MockUserRepository::new()), tokens.clone());
    if let Some(provider) = provider {
        auth = auth.with_oauth(provider);
    }

    let state = web::Data::new(AppState {
        auth_service: Arc::new(auth),
        history_service: Arc::new(HistoryService::new(Arc::new(MockHistoryRepository::new()))),
        token_service: tokens,
    });

    TestHarness {
        state,
        limiter: Arc::new(SlidingWindowLimiter::new(rate_config.clone())),
        rate_config,
    }
}
