//! Handler for POST /auth/login

use actix_web::{web, HttpResponse};
use serde_json::json;
use validator::Validate;

use lex_core::repositories::{HistoryRepository, UserRepository};

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::ApiError;

/// Authenticates a credential pair and issues a session token
pub async fn login<U, H>(
    state: web::Data<AppState<U, H>>,
    request: web::Json<LoginRequest>,
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

    let result = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(LoginResponse::from(&result)))
}
