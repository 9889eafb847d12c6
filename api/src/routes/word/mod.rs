//! Search history routes under /api/word
//!
//! Both routes sit behind the JWT middleware and additionally require the
//! email named in the request to match the session's email, so one logged-in
//! user cannot read or write another user's history.

use actix_web::{web, HttpResponse};
use serde_json::json;

use lex_core::repositories::{HistoryRepository, UserRepository};

use crate::app::AppState;
use crate::dto::auth::MessageResponse;
use crate::dto::word::{HistoryQuery, SaveWordRequest, WordsResponse};
use crate::middleware::AuthContext;

/// Saves a looked-up word to the session user's history
pub async fn save_word<U, H>(
    auth: AuthContext,
    state: web::Data<AppState<U, H>>,
    request: web::Json<SaveWordRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: HistoryRepository + 'static,
{
    let (word, email) = match (
        request.word.as_deref().filter(|w| !w.is_empty()),
        request.email.as_deref().filter(|e| !e.is_empty()),
    ) {
        (Some(word), Some(email)) => (word, email),
        _ => {
            return HttpResponse::BadRequest().json(json!({"error": "Missing word or email"}));
        }
    };

    if email != auth.email {
        log::warn!(
            "history write refused: request email does not match session user {}",
            auth.user_id
        );
        return HttpResponse::Forbidden().json(json!({"error": "Email does not match session"}));
    }

    match state.history_service.record_word(email, word).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Word saved to history")),
        Err(e) => {
            log::error!("failed to save word: {}", e);
            HttpResponse::InternalServerError().json(json!({"error": "Failed to save"}))
        }
    }
}

/// Returns the session user's history in insertion order
pub async fn get_words<U, H>(
    auth: AuthContext,
    state: web::Data<AppState<U, H>>,
    query: web::Query<HistoryQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: HistoryRepository + 'static,
{
    let email = match query.email.as_deref().filter(|e| !e.is_empty()) {
        Some(email) => email,
        None => {
            return HttpResponse::BadRequest().json(json!({"error": "Missing email"}));
        }
    };

    if email != auth.email {
        log::warn!(
            "history read refused: request email does not match session user {}",
            auth.user_id
        );
        return HttpResponse::Forbidden().json(json!({"error": "Email does not match session"}));
    }

    match state.history_service.get_history(email).await {
        Ok(words) => HttpResponse::Ok().json(WordsResponse { words }),
        Err(e) => {
            log::error!("failed to load history: {}", e);
            HttpResponse::InternalServerError().json(json!({"error": "Failed to load history"}))
        }
    }
}
