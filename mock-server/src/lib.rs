use std::collections::BTreeMap;

use axum::{
    body::{Body, Bytes},
    extract::{DefaultBodyLimit, Path, Query},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;

/// Body served by `/greeting`; never changes.
pub const GREETING: &str = "hello from the mock server";

/// "café" in ISO-8859-1.
pub const LATIN1_CAFE: &[u8] = b"caf\xe9";

#[derive(Debug, Deserialize)]
pub struct StatusParams {
    pub body: Option<String>,
}

pub fn app() -> Router {
    Router::new()
        .route("/echo", post(echo).layer(DefaultBodyLimit::disable()))
        .route("/headers", get(reflect_headers).post(reflect_headers))
        .route("/status/{code}", get(status).post(status))
        .route("/greeting", get(greeting))
        .route("/latin1", get(latin1))
        .route("/raw", get(raw))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Return the request body unchanged, with the request's content type.
async fn echo(headers: HeaderMap, body: Bytes) -> Response {
    let mut response = Response::new(Body::from(body));
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type.clone());
    }
    response
}

/// Request headers as a JSON object, names lowercased, repeated values joined.
async fn reflect_headers(headers: HeaderMap) -> Json<BTreeMap<String, String>> {
    let mut seen: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in &headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        seen.entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    Json(seen)
}

/// Answer with `code`, and `?body=` as a text body when given.
async fn status(Path(code): Path<u16>, Query(params): Query<StatusParams>) -> Response {
    let Ok(status) = StatusCode::from_u16(code) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    match params.body {
        Some(body) => (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response(),
        None => status.into_response(),
    }
}

async fn greeting() -> &'static str {
    GREETING
}

async fn latin1() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=ISO-8859-1")],
        LATIN1_CAFE,
    )
}

/// Latin-1 bytes with no `Content-Type` at all.
async fn raw() -> Response {
    Response::new(Body::from(LATIN1_CAFE))
}
