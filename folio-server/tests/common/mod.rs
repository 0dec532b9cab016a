#![allow(dead_code)]

//! Test infrastructure for folio-server API and page tests

use folio_auth::{Authenticator, RateLimitConfig, SessionSigner, SessionValidator, password};
use folio_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_ADMIN_EMAIL: &str = "admin@company.com";
pub const TEST_ADMIN_PASSWORD: &str = "correct-horse-battery";
pub const TEST_SESSION_SECRET: &[u8] = b"test-session-secret-at-least-32-bytes!";
pub const TEST_COOKIE_NAME: &str = "folio_session";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/folio-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing.
///
/// The rate limit is generous so credential tests never trip it; rate
/// limit tests build their own state with a tight quota.
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with_rate_limit(RateLimitConfig {
        max_requests: 1000,
        window_secs: 60,
    })
    .await
}

pub async fn create_test_app_state_with_rate_limit(rate_limit: RateLimitConfig) -> AppState {
    let pool = create_test_pool().await;

    let admin_password_hash =
        password::hash_password(TEST_ADMIN_PASSWORD).expect("Failed to hash test password");

    let signer = SessionSigner::new(TEST_SESSION_SECRET, 3600);
    let sessions = Arc::new(SessionValidator::with_hs256(TEST_SESSION_SECRET));
    let authenticator = Arc::new(Authenticator::new(
        TEST_ADMIN_EMAIL.to_string(),
        admin_password_hash,
        signer,
        rate_limit,
    ));

    AppState {
        pool,
        authenticator,
        sessions,
        cookie_name: TEST_COOKIE_NAME.to_string(),
    }
}

/// Insert a project row directly, with an explicit created_at for
/// ordering tests
pub async fn insert_project(pool: &SqlitePool, slug: &str, title: &str, created_at: i64) -> i64 {
    let data = serde_json::json!({
        "title": title,
        "description": "A project inserted by test fixtures",
        "skills": ["Rust", "SQLite"],
        "testimonial": {
            "content": "They delivered exactly what we needed.",
            "author": "Jane Doe",
            "role": "CTO at Example"
        }
    });

    let row: (i64,) =
        sqlx::query_as("INSERT INTO projects (slug, data, created_at) VALUES (?, ?, ?) RETURNING id")
            .bind(slug)
            .bind(data.to_string())
            .bind(created_at)
            .fetch_one(pool)
            .await
            .expect("Failed to insert test project");

    row.0
}

/// Sign in through the API and return the session cookie pair
/// (`name=token`) for use in a Cookie header
pub async fn sign_in_cookie(state: &AppState) -> String {
    let app = build_router(state.clone());

    let body = serde_json::json!({
        "email": TEST_ADMIN_EMAIL,
        "password": TEST_ADMIN_PASSWORD,
    });

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/sign-in")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Sign-in response missing Set-Cookie")
        .to_str()
        .unwrap();

    set_cookie
        .split(';')
        .next()
        .expect("Empty Set-Cookie header")
        .to_string()
}

/// Build a well-formed project creation request body
pub fn project_request_body(slug: Option<&str>, title: &str) -> serde_json::Value {
    let mut body = serde_json::json!({
        "data": {
            "title": title,
            "description": "A portfolio project built for an integration test",
            "skills": ["Rust", "Axum", "SQLite"],
            "testimonial": {
                "content": "Outstanding work from start to finish.",
                "author": "Jane Doe",
                "role": "CTO at Example"
            }
        }
    });
    if let Some(slug) = slug {
        body["slug"] = serde_json::json!(slug);
    }
    body
}
