//! Core services

pub mod auth;
pub mod history;
pub mod rate_limit;
pub mod token;

pub use auth::{AuthService, LoginResult, OAuthIdentity, OAuthProvider};
pub use history::HistoryService;
pub use rate_limit::{Decision, SlidingWindowLimiter};
pub use token::TokenService;
