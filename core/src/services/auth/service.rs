//! Credential and federated authentication flows
//!
//! Passwords are stored as salted bcrypt hashes and never compared in the
//! clear. Credential failures all collapse into the same generic
//! `InvalidCredentials` error so the API cannot be used to enumerate
//! registered emails.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::token::IssuedToken;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;

use super::oauth::OAuthProvider;
use crate::services::token::TokenService;

/// Outcome of a successful login: the session token and the principal
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: IssuedToken,
    pub user: User,
}

/// Authentication service over a user repository
pub struct AuthService<U: UserRepository> {
    users: Arc<U>,
    tokens: Arc<TokenService>,
    oauth: Option<Arc<dyn OAuthProvider>>,
}

impl<U: UserRepository> AuthService<U> {
    /// Creates the service without federated login
    pub fn new(users: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self {
            users,
            tokens,
            oauth: None,
        }
    }

    /// Enables federated login through the given provider
    pub fn with_oauth(mut self, provider: Arc<dyn OAuthProvider>) -> Self {
        self.oauth = Some(provider);
        self
    }

    /// Registers a new account
    ///
    /// Succeeds exactly once per email; a second registration with the same
    /// email fails with `UserAlreadyExists`. No password-strength or
    /// email-format validation is performed.
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<User> {
        if self.users.exists_by_email(email).await? {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| DomainError::internal(format!("password hashing failed: {e}")))?;

        let user = self.users.create(User::with_password(email, password_hash)).await?;
        info!(user_id = %user.id, "account created");
        Ok(user)
    }

    /// Validates an email/password pair against the store
    ///
    /// Succeeds iff a record exists for the exact email and the password
    /// matches its stored hash.
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<User> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!("login attempt for unknown email");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        // Federated accounts carry no hash and cannot log in with a password
        let hash = user
            .password_hash
            .as_deref()
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))?;

        let matches = bcrypt::verify(password, hash)
            .map_err(|e| DomainError::internal(format!("password verification failed: {e}")))?;

        if !matches {
            warn!(user_id = %user.id, "password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Authenticates and issues a session token
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginResult> {
        let mut user = self.authenticate(email, password).await?;

        user.update_last_login();
        let user = self.users.update(user).await?;

        let token = self.tokens.issue(&user)?;
        info!(user_id = %user.id, "login succeeded");
        Ok(LoginResult { token, user })
    }

    /// Builds the consent-page redirect for federated login
    pub fn oauth_authorize_url(&self, state: &str) -> DomainResult<String> {
        let provider = self.oauth_provider()?;
        Ok(provider.authorize_url(state))
    }

    /// Completes federated login for an authorization code
    ///
    /// The provider-supplied email keys the account: an existing user is
    /// logged in, otherwise one is created without a password hash. The
    /// session token issued afterwards is the same as for credential login.
    pub async fn login_with_oauth(&self, code: &str) -> DomainResult<LoginResult> {
        let provider = self.oauth_provider()?;
        let identity = provider.exchange_code(code).await?;

        let mut user = match self.users.find_by_email(&identity.email).await? {
            Some(user) => user,
            None => {
                let created = self
                    .users
                    .create(User::federated(&identity.email, identity.name.clone()))
                    .await?;
                info!(user_id = %created.id, "account created via identity provider");
                created
            }
        };

        user.update_last_login();
        let user = self.users.update(user).await?;

        let token = self.tokens.issue(&user)?;
        Ok(LoginResult { token, user })
    }

    fn oauth_provider(&self) -> DomainResult<&Arc<dyn OAuthProvider>> {
        self.oauth
            .as_ref()
            .ok_or_else(|| DomainError::internal("federated login is not configured"))
    }
}
