//! HTTP tests for the sliding-window rate limit on /api routes

mod common;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::{json, Value};

use lex_api::app;
use lex_shared::config::RateLimitConfig;

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

fn tight_limit(max_requests: u32) -> RateLimitConfig {
    RateLimitConfig {
        max_requests,
        ..RateLimitConfig::default()
    }
}

#[actix_web::test]
async fn api_requests_beyond_the_limit_get_429() {
    let h = common::harness_with_rate_limit(tight_limit(2));
    let app = init_app!(h);

    // The limiter sits in front of authentication, so even tokenless
    // requests consume window slots
    for _ in 0..2 {
        let req = test::TestRequest::get()
            .uri("/api/word?email=a@x.com")
            .insert_header(("X-Forwarded-For", "203.0.113.9"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    let req = test::TestRequest::get()
        .uri("/api/word?email=a@x.com")
        .insert_header(("X-Forwarded-For", "203.0.113.9"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(resp.headers().contains_key("Retry-After"));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Too many requests");
}

#[actix_web::test]
async fn clients_have_independent_budgets() {
    let h = common::harness_with_rate_limit(tight_limit(1));
    let app = init_app!(h);

    for ip in ["203.0.113.9", "203.0.113.10"] {
        let req = test::TestRequest::get()
            .uri("/api/word?email=a@x.com")
            .insert_header(("X-Forwarded-For", ip))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_ne!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    }
}

#[actix_web::test]
async fn auth_routes_are_not_rate_limited() {
    let h = common::harness_with_rate_limit(tight_limit(1));
    let app = init_app!(h);

    // Exhaust the /api budget for this client
    let req = test::TestRequest::get()
        .uri("/api/word?email=a@x.com")
        .insert_header(("X-Forwarded-For", "203.0.113.9"))
        .to_request();
    test::call_service(&app, req).await;

    for _ in 0..3 {
        let req = test::TestRequest::post()
            .uri("/auth/login")
            .insert_header(("X-Forwarded-For", "203.0.113.9"))
            .set_json(json!({"email": "a@x.com", "password": "pw"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_ne!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    }
}

#[actix_web::test]
async fn disabled_limiter_admits_everything() {
    let config = RateLimitConfig {
        enabled: false,
        max_requests: 1,
        ..RateLimitConfig::default()
    };
    let h = common::harness_with_rate_limit(config);
    let app = init_app!(h);

    for _ in 0..5 {
        let req = test::TestRequest::get()
            .uri("/api/word?email=a@x.com")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_ne!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    }
}
