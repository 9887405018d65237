//! The seam between request building and the network.
//!
//! # Design
//! `Transport` executes a built `HttpRequest` and hands back a `Connection`:
//! a response whose status and headers are available but whose body has not
//! been read yet. Decoding consumes the connection, so a response can be
//! decoded at most once and its streams are released when decoding returns.
//!
//! `UreqTransport` is the blocking implementation used by default. It builds
//! a fresh agent per request, so nothing is pooled or shared between calls.

use std::io::Read;

use tracing::trace;
use ureq::http::header::CONTENT_LENGTH;
use ureq::http::Response;
use ureq::{Agent, Body, BodyReader};

use crate::error::{HttpError, Result};
use crate::http::{HttpMethod, HttpRequest};

/// A response that has arrived but not been read.
pub trait Connection {
    type Body: Read;

    fn status(&self) -> u16;

    /// Look up a response header by name, ignoring case.
    fn header(&self, name: &str) -> Option<&str>;

    /// The success body stream.
    fn into_body(self) -> Self::Body;

    /// The error body stream, or `None` when the response carries no body.
    fn into_error_body(self) -> Option<Self::Body>;
}

/// Executes requests.
pub trait Transport {
    type Connection: Connection;

    fn send(&self, request: &HttpRequest) -> Result<Self::Connection>;
}

/// Blocking transport backed by `ureq`.
///
/// Non-200 statuses are returned as connections rather than errors so the
/// decoder can read the error body. Redirects are followed by `ureq`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UreqTransport;

impl Transport for UreqTransport {
    type Connection = UreqConnection;

    fn send(&self, request: &HttpRequest) -> Result<UreqConnection> {
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_connect(request.connect_timeout)
            .build()
            .new_agent();

        let connection_error = |e: ureq::Error| HttpError::Connection {
            url: request.url.clone(),
            reason: e.to_string(),
        };

        let response = match request.method {
            HttpMethod::Get => {
                let mut builder = agent.get(&request.url);
                for (name, value) in &request.headers {
                    trace!(header = %name, "applying request header");
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call().map_err(connection_error)?
            }
            HttpMethod::Post => {
                let mut builder = agent.post(&request.url);
                for (name, value) in &request.headers {
                    trace!(header = %name, "applying request header");
                    builder = builder.header(name.as_str(), value.as_str());
                }
                let body = request.body.as_deref().unwrap_or_default();
                builder.send(body.as_bytes()).map_err(connection_error)?
            }
        };

        Ok(UreqConnection { response })
    }
}

/// A `ureq` response awaiting decoding.
#[derive(Debug)]
pub struct UreqConnection {
    response: Response<Body>,
}

impl UreqConnection {
    /// Whether the response can carry an error body at all.
    fn has_body(&self) -> bool {
        if matches!(self.status(), 204 | 304) {
            return false;
        }
        self.header(CONTENT_LENGTH.as_str())
            .map(|len| len.trim() != "0")
            .unwrap_or(true)
    }
}

impl Connection for UreqConnection {
    type Body = BodyReader<'static>;

    fn status(&self) -> u16 {
        self.response.status().as_u16()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.response
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    fn into_body(self) -> Self::Body {
        self.response.into_body().into_reader()
    }

    fn into_error_body(self) -> Option<Self::Body> {
        if self.has_body() {
            Some(self.into_body())
        } else {
            None
        }
    }
}
