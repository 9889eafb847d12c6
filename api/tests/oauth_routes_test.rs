//! HTTP tests for the federated login flow

mod common;

use actix_web::http::{header, StatusCode};
use actix_web::{test, App};
use serde_json::Value;

use common::FakeProvider;
use lex_api::app;
use lex_core::services::OAuthIdentity;

macro_rules! init_oauth_app {
    ($h:expr) => {
        test::init_service(App::new().configure(app::configure(
            $h.state.clone(),
            $h.limiter.clone(),
            $h.rate_config.clone(),
            true,
        )))
        .await
    };
}

fn provider() -> FakeProvider {
    FakeProvider {
        identity: OAuthIdentity {
            email: "fed@x.com".to_string(),
            name: Some("Fed User".to_string()),
        },
    }
}

#[actix_web::test]
async fn authorize_redirects_with_state_cookie() {
    let h = common::harness_with_oauth(provider());
    let app = init_oauth_app!(h);

    let req = test::TestRequest::get().uri("/auth/google").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);

    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(location.starts_with("https://provider.test/consent?state="));

    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "oauth_state")
        .expect("state cookie missing");
    assert!(cookie.http_only().unwrap_or(false));

    // The redirect carries the same state the cookie does
    assert!(location.ends_with(cookie.value()));
}

#[actix_web::test]
async fn callback_requires_matching_state() {
    let h = common::harness_with_oauth(provider());
    let app = init_oauth_app!(h);

    let req = test::TestRequest::get()
        .uri("/auth/google/callback?code=good-code&state=forged")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid state");
}

#[actix_web::test]
async fn callback_logs_in_with_valid_state_and_code() {
    let h = common::harness_with_oauth(provider());
    let app = init_oauth_app!(h);

    let req = test::TestRequest::get().uri("/auth/google").to_request();
    let resp = test::call_service(&app, req).await;
    let state_cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "oauth_state")
        .unwrap()
        .into_owned();

    let req = test::TestRequest::get()
        .uri(&format!(
            "/auth/google/callback?code=good-code&state={}",
            state_cookie.value()
        ))
        .cookie(state_cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["user"]["email"], "fed@x.com");
    assert_eq!(body["user"]["name"], "Fed User");
}

#[actix_web::test]
async fn callback_with_bad_code_is_unauthorized() {
    let h = common::harness_with_oauth(provider());
    let app = init_oauth_app!(h);

    let req = test::TestRequest::get().uri("/auth/google").to_request();
    let resp = test::call_service(&app, req).await;
    let state_cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "oauth_state")
        .unwrap()
        .into_owned();

    let req = test::TestRequest::get()
        .uri(&format!(
            "/auth/google/callback?code=bad-code&state={}",
            state_cookie.value()
        ))
        .cookie(state_cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
