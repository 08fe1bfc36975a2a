mod common;

use axum::http::{Method, Request, StatusCode, header};
use serde_json::json;

use common::{send, send_request, test_app};

#[tokio::test]
async fn healthcheck_with_token() {
    let app = test_app().await;

    let resp = send(&app, Method::GET, "/", None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.text(), "Hello, world!");
}

#[tokio::test]
async fn missing_token_is_rejected_on_every_route() {
    let app = test_app().await;

    let cases = [
        (Method::GET, "/"),
        (Method::GET, "/bookmarks"),
        (Method::POST, "/bookmarks"),
        (Method::GET, "/bookmarks/1"),
        (Method::PATCH, "/bookmarks/1"),
        (Method::DELETE, "/bookmarks/1"),
    ];

    for (method, uri) in cases {
        let request = Request::builder().method(method.clone()).uri(uri);
        let resp = send_request(&app, request, None).await;
        assert_eq!(resp.status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(
            resp.json(),
            json!({ "error": { "message": "Unauthorized request" } })
        );
    }
}

#[tokio::test]
async fn wrong_token_or_scheme_is_rejected() {
    let app = test_app().await;

    for value in [
        "Bearer not-the-token".to_string(),
        format!("Basic {}", common::API_TOKEN),
        common::API_TOKEN.to_string(),
    ] {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/bookmarks")
            .header(header::AUTHORIZATION, value.as_str());
        let resp = send_request(&app, request, None).await;
        assert_eq!(resp.status, StatusCode::UNAUTHORIZED, "{value}");
    }
}

#[tokio::test]
async fn unauthorized_post_does_not_persist() {
    let app = test_app().await;

    let request = Request::builder().method(Method::POST).uri("/bookmarks");
    let resp = send_request(&app, request, Some(common::valid_bookmark())).await;
    assert_eq!(resp.status, StatusCode::UNAUTHORIZED);

    let list = send(&app, Method::GET, "/bookmarks", None).await;
    assert_eq!(list.json(), json!([]));
}
