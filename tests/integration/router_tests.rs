//! In-process router tests
//!
//! These drive the axum router with `tower::ServiceExt::oneshot` against a
//! lazily connected pool, so they only cover paths that are answered before
//! any query runs.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;
use uuid::Uuid;

use rental_server::{
    api,
    config::AppConfig,
    models::user::{Role, UserClaims},
    repository::Repository,
    services::Services,
    AppState,
};

fn app() -> (Router, AppConfig) {
    let config = AppConfig::default();
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database.url)
        .expect("lazy pool");
    let services = Services::new(Repository::new(pool), config.auth.clone());
    let state = AppState {
        config: Arc::new(config.clone()),
        services: Arc::new(services),
    };
    (api::router(state), config)
}

fn token(config: &AppConfig) -> String {
    let now = Utc::now().timestamp();
    let user_id = Uuid::new_v4();
    UserClaims {
        sub: user_id.to_string(),
        user_id,
        email: "renter@example.com".to_string(),
        roles: vec![Role::Renter],
        exp: now + 3600,
        iat: now,
    }
    .create_token(&config.auth.jwt_secret)
    .expect("token")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app();

    let response = app
        .oneshot(Request::get("/api/v1/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_bookings_require_token() {
    let (app, _) = app();

    let response = app
        .oneshot(Request::get("/api/v1/bookings").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["code"], 2);
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let (app, _) = app();

    let response = app
        .oneshot(
            Request::get("/api/v1/auth/me")
                .header(header::AUTHORIZATION, "Bearer not.a.token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_bearer_scheme_rejected() {
    let (app, config) = app();

    let response = app
        .oneshot(
            Request::get("/api/v1/bookings")
                .header(header::AUTHORIZATION, format!("Token {}", token(&config)))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_inverted_booking_range_is_bad_request() {
    let (app, config) = app();

    let payload = json!({
        "property_id": Uuid::new_v4(),
        "start_date": "2024-03-10",
        "end_date": "2024-03-09"
    });

    let response = app
        .oneshot(
            Request::post("/api/v1/bookings")
                .header(header::AUTHORIZATION, format!("Bearer {}", token(&config)))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], 7);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid date range selected"));
}

#[tokio::test]
async fn test_missing_booking_start_is_bad_request() {
    let (app, config) = app();

    let payload = json!({
        "property_id": Uuid::new_v4(),
        "end_date": "2024-03-09"
    });

    let response = app
        .oneshot(
            Request::post("/api/v1/bookings")
                .header(header::AUTHORIZATION, format!("Bearer {}", token(&config)))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], 7);
}

#[tokio::test]
async fn test_inverted_quote_is_bad_request() {
    let (app, config) = app();

    let uri = format!(
        "/api/v1/bookings/quote?property_id={}&start_date=2024-01-05&end_date=2024-01-01",
        Uuid::new_v4()
    );

    let response = app
        .oneshot(
            Request::get(uri)
                .header(header::AUTHORIZATION, format!("Bearer {}", token(&config)))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_rejects_bad_email() {
    let (app, _) = app();

    let payload = json!({
        "email": "not-an-email",
        "password": "Str0ng!pass",
        "confirm_password": "Str0ng!pass",
        "first_name": "Ada",
        "last_name": "Lovelace"
    });

    let response = app
        .oneshot(
            Request::post("/api/v1/auth/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], 5);
}

#[tokio::test]
async fn test_register_rejects_weak_password() {
    let (app, _) = app();

    let payload = json!({
        "email": "ada@example.com",
        "password": "weakpass",
        "confirm_password": "weakpass",
        "first_name": "Ada",
        "last_name": "Lovelace"
    });

    let response = app
        .oneshot(
            Request::post("/api/v1/auth/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (app, _) = app();

    let response = app
        .oneshot(
            Request::get("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"]["/bookings"].is_object());
}

#[tokio::test]
async fn test_huge_page_is_bad_request() {
    let (app, _) = app();

    let response = app
        .oneshot(
            Request::get("/api/v1/properties?page=9223372036854775807&per_page=100")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], 5);
}

#[tokio::test]
async fn test_malformed_booking_date_uses_error_body() {
    let (app, config) = app();

    let payload = json!({
        "property_id": Uuid::new_v4(),
        "start_date": "2024-13-01",
        "end_date": "2024-12-03"
    });

    let response = app
        .oneshot(
            Request::post("/api/v1/bookings")
                .header(header::AUTHORIZATION, format!("Bearer {}", token(&config)))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], 5);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_malformed_quote_date_uses_error_body() {
    let (app, config) = app();

    let uri = format!(
        "/api/v1/bookings/quote?property_id={}&start_date=not-a-date",
        Uuid::new_v4()
    );

    let response = app
        .oneshot(
            Request::get(uri)
                .header(header::AUTHORIZATION, format!("Bearer {}", token(&config)))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], 5);
}
