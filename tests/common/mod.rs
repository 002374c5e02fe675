//! Shared fixtures for the API tests.
//!
//! Builds the real application router over an in-memory store, with all
//! static keys configured, so every test exercises the production
//! routing, middleware, and handler code.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request};
use axum::Router;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use streamvault::routes::create_router;
use streamvault::server::{AppState, Config};

pub const API_KEY: &str = "test-api-key";
pub const CLIP_KEY: &str = "test-clip-key";
pub const WIKI_PASSWORD: &str = "test-wiki-password";

/// In-memory store with migrations applied. Single connection that is
/// never recycled, so the database lives as long as the pool.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory store");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

fn test_config(twitch_api_url: &str) -> Config {
    Config {
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        message_api_key: Some(API_KEY.to_string()),
        clip_key: Some(CLIP_KEY.to_string()),
        wiki_password: Some(WIKI_PASSWORD.to_string()),
        twitch_client_id: Some("test-client-id".to_string()),
        twitch_oauth_token: Some("Bearer test-oauth".to_string()),
        twitch_api_url: twitch_api_url.to_string(),
        notify_base_url: None,
    }
}

/// Application router over a fresh in-memory store.
pub async fn test_app() -> Router {
    test_app_with_twitch("http://127.0.0.1:9").await
}

/// Application router whose Helix client points at the given base URL
/// (a wiremock server in the clip tests).
pub async fn test_app_with_twitch(twitch_api_url: &str) -> Router {
    let state = AppState::new(test_pool().await, test_config(twitch_api_url));
    create_router(state)
}

/// Request without a body.
pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Request with a JSON body.
pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Request with a JSON body and an Authorization header.
pub fn authed_json_request(method: &str, uri: &str, auth: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, auth)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Request with only an Authorization header.
pub fn authed_request(method: &str, uri: &str, auth: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, auth)
        .body(Body::empty())
        .unwrap()
}

/// Decode a response body as JSON.
pub async fn body_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("body is not JSON")
}
