//! Shared helpers for route tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use taskboard_axum::{AxumContext, CorsConfig, create_router};
use taskboard_db::TestDb;
use tower::ServiceExt;

/// Router over a fresh in-memory database.
///
/// The `TestDb` is returned so the pool outlives the test body.
pub async fn test_app() -> (Router, TestDb) {
    let db = TestDb::new().await.unwrap();
    let ctx = AxumContext::new(db.task_service());
    (create_router(ctx, &CorsConfig::AllowAll), db)
}

/// Send a request with an optional raw body and collect the response.
pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Bytes) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(text.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes)
}

/// Send a JSON request and parse the JSON response.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let text = body.map(|v| v.to_string());
    let (status, bytes) = send_raw(app, method, uri, text.as_deref()).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Create a task and return its JSON, asserting `201 Created`.
pub async fn create_task(app: &Router, body: Value) -> Value {
    let (status, task) = send(app, "POST", "/api/tasks", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {task}");
    task
}
