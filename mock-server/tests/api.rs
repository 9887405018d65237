use std::collections::BTreeMap;

use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, GREETING, LATIN1_CAFE};
use tower::ServiceExt;

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- echo ---

#[tokio::test]
async fn echo_returns_body_and_content_type() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/echo")
                .header(http::header::CONTENT_TYPE, "text/plain")
                .body("ping".to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[http::header::CONTENT_TYPE], "text/plain");
    assert_eq!(body_bytes(resp).await, "ping");
}

#[tokio::test]
async fn echo_without_content_type_sends_none() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/echo")
                .body("x".to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(resp.headers().get(http::header::CONTENT_TYPE).is_none());
}

#[tokio::test]
async fn echo_accepts_bodies_over_default_limit() {
    let body = "x".repeat(3 * 1024 * 1024);
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/echo")
                .body(body.clone())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await.len(), body.len());
}

// --- headers ---

#[tokio::test]
async fn headers_are_reflected_lowercased() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/headers")
                .header("X-A", "1")
                .header("Accept-Charset", "UTF-8")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let seen: BTreeMap<String, String> = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(seen["x-a"], "1");
    assert_eq!(seen["accept-charset"], "UTF-8");
}

#[tokio::test]
async fn repeated_headers_are_joined() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/headers")
                .header("X-A", "1")
                .header("X-A", "2")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    let seen: BTreeMap<String, String> = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(seen["x-a"], "1, 2");
}

// --- status ---

#[tokio::test]
async fn status_with_body() {
    let resp = app().oneshot(get("/status/404?body=not%20found")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_bytes(resp).await, "not found");
}

#[tokio::test]
async fn status_without_body_is_empty() {
    let resp = app().oneshot(get("/status/500")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn out_of_range_status_is_400() {
    let resp = app().oneshot(get("/status/1000")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- fixed bodies ---

#[tokio::test]
async fn greeting_is_constant() {
    let resp = app().oneshot(get("/greeting")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, GREETING);
}

#[tokio::test]
async fn latin1_declares_its_charset() {
    let resp = app().oneshot(get("/latin1")).await.unwrap();

    assert_eq!(
        resp.headers()[http::header::CONTENT_TYPE],
        "text/plain; charset=ISO-8859-1"
    );
    assert_eq!(body_bytes(resp).await, LATIN1_CAFE);
}

#[tokio::test]
async fn raw_has_no_content_type() {
    let resp = app().oneshot(get("/raw")).await.unwrap();

    assert!(resp.headers().get(http::header::CONTENT_TYPE).is_none());
    assert_eq!(body_bytes(resp).await, LATIN1_CAFE);
}
