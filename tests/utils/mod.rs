#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use course_api::api::router;
use course_api::db::{CourseStore, SqliteCourseStore};
use course_api::state::AppState;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

/// Router over a fresh in-memory database with the `course` table created.
pub async fn sqlite_app() -> Router {
    // a single connection that never expires, otherwise the in-memory database goes with it
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create database");

    let store = SqliteCourseStore::new(pool);
    store.ensure_schema().await.expect("Failed to create course table");

    router(AppState::new(Arc::new(store)))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn list_json(app: &Router) -> (StatusCode, Value) {
    let (status, body) = send(app, Method::GET, "/courses", None).await;
    let json = serde_json::from_str(&body).unwrap_or(Value::String(body));
    (status, json)
}
