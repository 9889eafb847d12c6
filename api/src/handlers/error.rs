//! Domain error to HTTP response mapping
//!
//! One wrapper type carries `DomainError` across the actix boundary so
//! route handlers can use `?`. Persistence failures are logged here with
//! their detail; the response bodies stay generic.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

use lex_core::errors::{AuthError, DomainError, TokenError};

/// Wrapper implementing actix's `ResponseError` for domain failures
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::Auth(AuthError::UserAlreadyExists) => StatusCode::BAD_REQUEST,
            DomainError::Auth(_) => StatusCode::UNAUTHORIZED,
            DomainError::Token(TokenError::TokenGenerationFailed) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            DomainError::Token(_) => StatusCode::UNAUTHORIZED,
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::RateLimitExceeded { .. } => StatusCode::TOO_MANY_REQUESTS,
            DomainError::Database { .. } | DomainError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match &self.0 {
            DomainError::Auth(AuthError::UserAlreadyExists) => {
                HttpResponse::BadRequest().json(json!({"message": "User already exists"}))
            }
            DomainError::Auth(AuthError::InvalidCredentials) => {
                HttpResponse::Unauthorized().json(json!({"error": "Invalid credentials"}))
            }
            DomainError::Auth(AuthError::OAuthExchange { message }) => {
                log::warn!("OAuth exchange failed: {}", message);
                HttpResponse::Unauthorized().json(json!({"error": "Authentication failed"}))
            }
            DomainError::Token(TokenError::TokenGenerationFailed) => {
                log::error!("token generation failed");
                HttpResponse::InternalServerError().json(json!({"error": "Internal server error"}))
            }
            DomainError::Token(_) => HttpResponse::Unauthorized()
                .json(json!({"error": "Invalid or expired session"})),
            DomainError::Validation(e) => {
                HttpResponse::BadRequest().json(json!({"error": e.to_string()}))
            }
            DomainError::RateLimitExceeded { .. } => {
                HttpResponse::TooManyRequests().json(json!({"error": "Too many requests"}))
            }
            DomainError::Database { message } => {
                log::error!("database failure: {}", message);
                HttpResponse::InternalServerError().json(json!({"error": "Internal server error"}))
            }
            DomainError::Internal { message } => {
                log::error!("internal failure: {}", message);
                HttpResponse::InternalServerError().json(json!({"error": "Internal server error"}))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_maps_to_bad_request_with_message_body() {
        let err = ApiError(DomainError::Auth(AuthError::UserAlreadyExists));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_credential_failure_maps_to_unauthorized() {
        let err = ApiError(DomainError::Auth(AuthError::InvalidCredentials));
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_database_failure_maps_to_internal_error() {
        let err = ApiError(DomainError::database("connection reset"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_rate_limit_maps_to_too_many_requests() {
        let err = ApiError(DomainError::RateLimitExceeded {
            retry_after_seconds: 30,
        });
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
    }
}
