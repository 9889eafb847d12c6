//! End-to-end flows over the core services with in-memory repositories

use std::sync::Arc;

use lex_core::errors::{AuthError, DomainError};
use lex_core::repositories::{MockHistoryRepository, MockUserRepository};
use lex_core::services::{AuthService, HistoryService, TokenService};
use lex_shared::config::JwtConfig;

fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(JwtConfig::new("integration-secret")))
}

#[tokio::test]
async fn signup_login_and_session_flow() {
    let tokens = token_service();
    let auth = AuthService::new(Arc::new(MockUserRepository::new()), tokens.clone());

    // Signup succeeds once
    auth.register("a@x.com", "p1").await.unwrap();

    // Second signup with the same email conflicts
    let err = auth.register("a@x.com", "p1").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::UserAlreadyExists)
    ));

    // Correct credentials log in and yield a session bound to the identity
    let login = auth.login("a@x.com", "p1").await.unwrap();
    let claims = tokens.verify(&login.token.token).unwrap();
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.user_id().unwrap(), login.user.id);

    // Wrong password fails
    let err = auth.login("a@x.com", "wrong").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn history_records_survive_duplicate_writes() {
    let history = HistoryService::new(Arc::new(MockHistoryRepository::new()));

    history.record_word("a@x.com", "hello").await.unwrap();
    history.record_word("a@x.com", "hello").await.unwrap();
    history.record_word("a@x.com", "world").await.unwrap();

    let words = history.get_history("a@x.com").await.unwrap();
    assert_eq!(words.len(), 2);
    assert!(words.contains(&"hello".to_string()));
    assert!(words.contains(&"world".to_string()));
}

#[tokio::test]
async fn concurrent_duplicate_writes_collapse() {
    let history = Arc::new(HistoryService::new(Arc::new(MockHistoryRepository::new())));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let history = history.clone();
        handles.push(tokio::spawn(async move {
            history.record_word("a@x.com", "echo").await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(history.get_history("a@x.com").await.unwrap(), vec!["echo"]);
}
