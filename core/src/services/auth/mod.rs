//! Authentication service: credential and federated login

mod oauth;
mod service;

pub use oauth::{OAuthIdentity, OAuthProvider};
pub use service::{AuthService, LoginResult};
