//! HTTP exchange types described as plain data.
//!
//! # Design
//! `HttpRequest` is what the builder produces and a `Transport` consumes.
//! `HttpResponse` is the mirror image for hosts that perform the round-trip
//! themselves: it implements `Connection`, so it can be handed straight to
//! the decoder. `ResponseOutcome` is the decoder's result.
//!
//! Header lists are ordered `Vec`s rather than maps so that the order the
//! caller supplied is the order that goes on the wire.

use std::io::Cursor;
use std::time::Duration;

use crate::error::{status_message, HttpError, Result};
use crate::transport::Connection;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// A fully built request, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Written to the wire as UTF-8.
    pub body: Option<String>,
    /// Only set for POST; GET leaves connection setup to the transport default.
    pub connect_timeout: Option<Duration>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
            connect_timeout: None,
        }
    }

    /// Set a header, replacing any earlier value with the same name.
    ///
    /// Names compare case-insensitively; the replaced entry keeps its
    /// original position.
    pub fn set_header(&mut self, name: &str, value: &str) {
        match self
            .headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(entry) => *entry = (name.to_string(), value.to_string()),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// A response described as plain data.
///
/// `body` is `None` when the server sent no body at all, which the decoder
/// treats as "no error stream" for non-200 statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl Connection for HttpResponse {
    type Body = Cursor<Vec<u8>>;

    fn status(&self) -> u16 {
        self.status
    }

    fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    fn into_body(self) -> Self::Body {
        Cursor::new(self.body.unwrap_or_default())
    }

    fn into_error_body(self) -> Option<Self::Body> {
        self.body.map(Cursor::new)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Result of decoding a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// Status 200, body decoded.
    Success { body: String },
    /// Any other status. `body` is `None` when there was no error stream.
    Failure { status: u16, body: Option<String> },
}

impl ResponseOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ResponseOutcome::Success { .. })
    }

    /// The success body, or the composed `STATUS CODE =` message.
    pub fn message(&self) -> String {
        match self {
            ResponseOutcome::Success { body } => body.clone(),
            ResponseOutcome::Failure { status, body } => status_message(*status, body.as_deref()),
        }
    }

    pub fn into_result(self) -> Result<String> {
        match self {
            ResponseOutcome::Success { body } => Ok(body),
            ResponseOutcome::Failure { status, body } => Err(HttpError::status(status, body)),
        }
    }
}
