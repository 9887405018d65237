//! Synchronous HTTP request helper returning response bodies as text.
//!
//! # Overview
//! Issues GET and POST requests with optional headers, content type and
//! charset, and decodes the response into a `String`. A 200 yields the body;
//! anything else yields `HttpError::Status` carrying the status and a
//! `STATUS CODE =` message with the error body appended when there is one.
//!
//! # Design
//! - `HttpClient` holds only a `Config` and a `Transport`; calls share no
//!   mutable state and each opens its own connection.
//! - Every exchange is `build_request` → `Transport::send` → `decode`, so the
//!   header layering and the decoding rules are testable without I/O.
//! - The request always advertises a charset (UTF-8 unless told otherwise),
//!   but a response without a `charset` parameter is decoded with the reader
//!   default rather than a forced one.

pub mod charset;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod request;
pub mod transport;

pub use charset::charset_of;
pub use client::HttpClient;
pub use config::Config;
pub use error::{HttpError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse, ResponseOutcome};
pub use request::RequestSpec;
pub use transport::{Connection, Transport, UreqConnection, UreqTransport};
