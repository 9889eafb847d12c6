//! Handler for POST /auth/signup

use actix_web::{web, HttpResponse};
use serde_json::json;
use validator::Validate;

use lex_core::repositories::{HistoryRepository, UserRepository};

use crate::app::AppState;
use crate::dto::auth::{MessageResponse, SignupRequest};
use crate::handlers::ApiError;

/// Registers a new account
///
/// Returns `201` with a confirmation message, or `400` when the email is
/// already registered or a field is missing.
pub async fn signup<U, H>(
    state: web::Data<AppState<U, H>>,
    request: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HistoryRepository + 'static,
{
    if request.validate().is_err() {
        return Ok(
            HttpResponse::BadRequest().json(json!({"error": "Missing email or password"}))
        );
    }

    state
        .auth_service
        .register(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Created().json(MessageResponse::new("User created")))
}
