//! Error types for the request helper.
//!
//! # Design
//! `Status` gets its own variant because callers routinely branch on "the
//! server answered, but not with 200" versus "the exchange itself failed."
//! Its `Display` output is the composed `STATUS CODE =` message, which some
//! callers parse, so the format must not drift.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HttpError>;

/// Errors returned by `HttpClient` and the transport layer.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The URL was malformed or the host could not be reached when the
    /// request was sent. Never retried.
    #[error("connection to {url} failed: {reason}")]
    Connection { url: String, reason: String },

    /// The server answered with a status other than 200.
    #[error("{message}")]
    Status {
        status: u16,
        body: Option<String>,
        message: String,
    },

    /// Reading a response stream failed part way through.
    #[error("I/O error while reading response: {0}")]
    Io(#[from] std::io::Error),

    /// The response declared a charset the decoder has no table for.
    #[error("unsupported charset: {0}")]
    UnsupportedCharset(String),

    /// A request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// A configuration value could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl HttpError {
    /// Build a `Status` error, composing the message callers see.
    pub fn status(status: u16, body: Option<String>) -> Self {
        let message = status_message(status, body.as_deref());
        HttpError::Status {
            status,
            body,
            message,
        }
    }

    /// The HTTP status, if this error came from a non-200 response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// `STATUS CODE =<status>`, followed by a blank line and the error body when
/// the response carried one.
pub fn status_message(status: u16, body: Option<&str>) -> String {
    match body {
        Some(body) => format!("STATUS CODE ={status}\n\n{body}"),
        None => format!("STATUS CODE ={status}"),
    }
}
