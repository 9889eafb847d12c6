//! HTTP tests for signup, login and the ambient endpoints

mod common;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::{json, Value};

use lex_api::app;

macro_rules! init_app {
    ($h:expr) => {
        test::init_service(App::new().configure(app::configure(
            $h.state.clone(),
            $h.limiter.clone(),
            $h.rate_config.clone(),
            false,
        )))
        .await
    };
}

#[actix_web::test]
async fn signup_succeeds_once_then_conflicts() {
    let h = common::harness();
    let app = init_app!(h);

    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(json!({"email": "a@x.com", "password": "pw123456"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User created");

    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(json!({"email": "a@x.com", "password": "other"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User already exists");
}

#[actix_web::test]
async fn signup_rejects_missing_fields() {
    let h = common::harness();
    let app = init_app!(h);

    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(json!({"email": "", "password": "pw"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn login_returns_bearer_token_and_user() {
    let h = common::harness();
    let app = init_app!(h);

    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(json!({"email": "a@x.com", "password": "pw123456"}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"email": "a@x.com", "password": "pw123456"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "Bearer");
    assert!(body["access_token"].as_str().is_some_and(|t| !t.is_empty()));
    assert!(body["expires_in"].as_i64().is_some_and(|e| e > 0));
    assert_eq!(body["user"]["email"], "a@x.com");
    assert_eq!(body["user"]["name"], "a");
}

#[actix_web::test]
async fn login_with_wrong_password_is_unauthorized() {
    let h = common::harness();
    let app = init_app!(h);

    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(json!({"email": "a@x.com", "password": "pw123456"}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"email": "a@x.com", "password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid credentials");
}

#[actix_web::test]
async fn login_with_unknown_email_is_unauthorized() {
    let h = common::harness();
    let app = init_app!(h);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"email": "nobody@x.com", "password": "pw"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid credentials");
}

#[actix_web::test]
async fn health_and_unknown_routes() {
    let h = common::harness();
    let app = init_app!(h);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
}

#[actix_web::test]
async fn google_routes_absent_when_oauth_disabled() {
    let h = common::harness();
    let app = init_app!(h);

    let req = test::TestRequest::get().uri("/auth/google").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
