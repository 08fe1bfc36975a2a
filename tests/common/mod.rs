#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use bookmarks_api::db::Database;
use bookmarks_api::handler::AppState;

pub const API_TOKEN: &str = "test-api-token";

/// Full router over a fresh in-memory database.
pub async fn test_app() -> Router {
    test_app_with_db().await.0
}

/// Same as [`test_app`], also handing back the database behind the router.
pub async fn test_app_with_db() -> (Router, Arc<Database>) {
    let db = Database::in_memory().await.expect("in-memory database");
    let state = AppState::new(db, API_TOKEN);
    let db = state.db.clone();
    (bookmarks_api::app(state), db)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is UTF-8")
    }
}

/// Sends an authorized request, with `body` serialized as JSON when given.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {API_TOKEN}"));
    send_request(app, request, body).await
}

pub async fn send_request(
    app: &Router,
    request: axum::http::request::Builder,
    body: Option<Value>,
) -> TestResponse {
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("valid request");

    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body")
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn create(app: &Router, body: Value) -> Value {
    let resp = send(app, Method::POST, "/bookmarks", Some(body)).await;
    assert_eq!(resp.status, StatusCode::CREATED, "{}", resp.text());
    resp.json()
}

pub fn valid_bookmark() -> Value {
    serde_json::json!({
        "title": "Test new bookmark",
        "description": "Test description",
        "url": "https://www.google.com",
        "rating": 5,
    })
}
