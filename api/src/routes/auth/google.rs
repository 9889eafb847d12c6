//! Handlers for GET /auth/google and GET /auth/google/callback
//!
//! The consent redirect sets a random `state` value in an HttpOnly cookie;
//! the callback requires the query `state` to match it before the code is
//! exchanged. A callback without the matching cookie is refused.

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use lex_core::repositories::{HistoryRepository, UserRepository};

use crate::app::AppState;
use crate::dto::auth::{LoginResponse, OAuthCallbackQuery};
use crate::handlers::ApiError;

const STATE_COOKIE: &str = "oauth_state";

/// Starts the consent flow: issues the CSRF state and redirects to Google
pub async fn authorize<U, H>(
    state: web::Data<AppState<U, H>>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HistoryRepository + 'static,
{
    let csrf_state = Uuid::new_v4().to_string();
    let location = state.auth_service.oauth_authorize_url(&csrf_state)?;

    let cookie = Cookie::build(STATE_COOKIE, csrf_state)
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/auth/google")
        .max_age(CookieDuration::minutes(10))
        .finish();

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .cookie(cookie)
        .finish())
}

/// Completes the consent flow: verifies the state and exchanges the code
pub async fn callback<U, H>(
    req: HttpRequest,
    state: web::Data<AppState<U, H>>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    H: HistoryRepository + 'static,
{
    let expected = req.cookie(STATE_COOKIE).map(|c| c.value().to_string());

    if expected.as_deref() != Some(query.state.as_str()) {
        log::warn!("OAuth callback with missing or mismatched state");
        return Ok(HttpResponse::BadRequest().json(json!({"error": "Invalid state"})));
    }

    let result = state.auth_service.login_with_oauth(&query.code).await?;

    // The state is single-use; expire the cookie with the response
    let mut expired = Cookie::build(STATE_COOKIE, "")
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/auth/google")
        .finish();
    expired.make_removal();

    Ok(HttpResponse::Ok()
        .cookie(expired)
        .json(LoginResponse::from(&result)))
}
