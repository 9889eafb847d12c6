//! Domain error taxonomy for the LexVault backend
//!
//! Every failure is handled per request; nothing here crashes the process
//! and no operation is retried automatically.

use thiserror::Error;

/// Convenience alias for results carrying a [`DomainError`]
pub type DomainResult<T> = Result<T, DomainError>;

/// Authentication failures
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Deliberately generic: covers unknown email, missing password hash and
    /// password mismatch alike, to avoid user enumeration
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Identity provider exchange failed: {message}")]
    OAuthExchange { message: String },
}

/// Session token failures
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Request validation failures
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    RequiredField { field: String },
}

/// Unified domain error
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Rate limiter rejected the request
    #[error("Too many requests")]
    RateLimitExceeded { retry_after_seconds: u64 },

    /// The backing store is unreachable or returned an error
    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Helper for wrapping store errors
    pub fn database(message: impl Into<String>) -> Self {
        DomainError::Database {
            message: message.into(),
        }
    }

    /// Helper for internal invariant failures
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_failure_message_is_generic() {
        let err = DomainError::from(AuthError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_validation_error_names_field() {
        let err = ValidationError::RequiredField {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "Missing required field: email");
    }

    #[test]
    fn test_database_helper() {
        let err = DomainError::database("connection refused");
        assert!(matches!(err, DomainError::Database { .. }));
        assert!(err.to_string().contains("connection refused"));
    }
}
