// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use exercise_tracker::config::Config;
use exercise_tracker::db::JsonStore;
use exercise_tracker::routes::create_router;
use exercise_tracker::AppState;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// Create a test app over a throwaway data directory.
/// Returns the router, the shared state, and the directory guard (the data
/// files live only as long as it does).
#[allow(dead_code)]
pub async fn create_test_app() -> (Router, Arc<AppState>, TempDir) {
    let data_dir = tempfile::tempdir().expect("tempdir");
    let store = JsonStore::open(data_dir.path())
        .await
        .expect("Failed to open test store");

    let config = Config::default();
    let state = Arc::new(AppState::new(config, store));

    (create_router(state.clone()), state, data_dir)
}

/// POST a JSON body and return the raw response.
#[allow(dead_code)]
pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// GET a path and return the raw response.
#[allow(dead_code)]
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a user via the API and return its assigned id.
#[allow(dead_code)]
pub async fn create_user(app: &Router, username: &str) -> String {
    let response = post_json(app, "/api/users", serde_json::json!({ "username": username })).await;
    assert!(response.status().is_success());
    let body = body_json(response).await;
    body["_id"].as_str().expect("_id in response").to_string()
}

/// Record an exercise via the API and return the response body.
#[allow(dead_code)]
pub async fn create_exercise(app: &Router, user_id: &str, body: Value) -> Value {
    let response = post_json(app, &format!("/api/users/{}/exercises", user_id), body).await;
    assert!(response.status().is_success());
    body_json(response).await
}
