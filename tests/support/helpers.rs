// tests/support/helpers.rs
use std::{sync::Arc, time::Duration};

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

use kiji_core::application::dto::TokenSubject;
use kiji_core::application::ports::{security::TokenManager, time::Clock};
use kiji_core::application::services::ApplicationServices;
use kiji_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use kiji_core::domain::user::UserId;
use kiji_core::infrastructure::repositories::{
    SqliteArticleReadRepository, SqliteArticleWriteRepository,
};
use kiji_core::infrastructure::security::HmacTokenManager;
use kiji_core::infrastructure::time::SystemClock;
use kiji_core::presentation::http::{routes, state::HttpState};

pub const TEST_SIGNING_KEY: &str =
    "6a9f2d4c8b1e3a5d7c9f0b2e4a6d8c1f3b5e7a9d0c2f4b6e8a1d3c5f7b9e0a2d";

/// Single-connection pool so the in-memory database is shared across every
/// statement the test issues.
pub async fn memory_pool() -> Arc<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations apply");

    Arc::new(pool)
}

pub fn token_manager() -> HmacTokenManager {
    HmacTokenManager::new(TEST_SIGNING_KEY, Duration::from_secs(3600)).expect("valid test key")
}

pub async fn build_state_with_clock(clock: Arc<dyn Clock>) -> HttpState {
    let pool = memory_pool().await;
    let write: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool)));
    let read: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool)));
    let manager: Arc<dyn TokenManager> = Arc::new(token_manager());

    HttpState {
        services: Arc::new(ApplicationServices::new(write, read, manager, clock)),
    }
}

pub fn build_state_with_repos(
    write: Arc<dyn ArticleWriteRepository>,
    read: Arc<dyn ArticleReadRepository>,
) -> HttpState {
    let manager: Arc<dyn TokenManager> = Arc::new(token_manager());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    HttpState {
        services: Arc::new(ApplicationServices::new(write, read, manager, clock)),
    }
}

pub async fn make_test_router() -> axum::Router {
    let state = build_state_with_clock(Arc::new(SystemClock::default())).await;
    routes::build_router_with_rate_limiter(state, false)
}

pub async fn make_test_router_with_clock(clock: Arc<dyn Clock>) -> axum::Router {
    let state = build_state_with_clock(clock).await;
    routes::build_router_with_rate_limiter(state, false)
}

pub fn make_test_router_with_repos(
    write: Arc<dyn ArticleWriteRepository>,
    read: Arc<dyn ArticleReadRepository>,
) -> axum::Router {
    routes::build_router_with_rate_limiter(build_state_with_repos(write, read), false)
}

/// Mint a `Bearer …` header value for the given user id.
pub async fn bearer_for(user_id: i64) -> String {
    let issued = token_manager()
        .issue(TokenSubject {
            user_id: UserId::new(user_id).unwrap(),
        })
        .await
        .expect("token issues");
    format!("Bearer {}", issued.token)
}

pub fn get(uri: &str, bearer: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, bearer)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, bearer: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, bearer)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn delete(uri: &str, bearer: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(header::AUTHORIZATION, bearer)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_body(resp: axum::response::Response) -> Vec<u8> {
    body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = read_body(resp).await;
    serde_json::from_slice(&bytes).expect("valid json body")
}

/// Assert an ErrorResponse JSON body with the expected status and error
/// string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let json: Value = serde_json::from_slice(&body_bytes).expect("valid json error body");
    assert_eq!(
        json.get("error").and_then(Value::as_str),
        Some(expected_error)
    );
    assert!(
        json.get("message")
            .and_then(Value::as_str)
            .is_some_and(|m| !m.is_empty()),
        "expected non-empty message field"
    );
}
