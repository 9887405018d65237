//! Blocking request helper.
//!
//! # Design
//! `HttpClient` holds only its `Config` and a `Transport`; nothing is shared
//! between calls. Each exchange is split into `build_request` (pure), the
//! transport round-trip (`execute`) and `decode`, so the layering rules can
//! be tested without a network and hosts that do their own I/O can still run
//! the decoder on an `HttpResponse`.

use serde::Serialize;
use tracing::debug;

use crate::charset::{charset_of, read_text, read_text_lenient, DEFAULT_REQUEST_CHARSET};
use crate::config::Config;
use crate::error::{HttpError, Result};
use crate::http::{HttpMethod, HttpRequest, ResponseOutcome};
use crate::request::RequestSpec;
use crate::transport::{Connection, Transport, UreqTransport};

pub const ACCEPT_CHARSET: &str = "Accept-Charset";
pub const CONTENT_TYPE: &str = "Content-Type";

/// Synchronous client issuing GET and POST requests and returning text.
#[derive(Debug, Clone, Default)]
pub struct HttpClient<T = UreqTransport> {
    config: Config,
    transport: T,
}

impl HttpClient<UreqTransport> {
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, UreqTransport)
    }
}

impl<T: Transport> HttpClient<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn get(&self, url: &str) -> Result<String> {
        self.send(&RequestSpec::get(url))
    }

    /// POST `body` as `text/plain`.
    pub fn post(&self, url: &str, body: &str) -> Result<String> {
        self.send(&RequestSpec::post(url, body))
    }

    pub fn post_text(&self, url: &str, body: &str) -> Result<String> {
        self.post(url, body)
    }

    pub fn post_json(&self, url: &str, json: &str) -> Result<String> {
        self.send(&RequestSpec::post(url, json).content_type("application/json"))
    }

    /// Serialize `value` with `serde_json`, then [`HttpClient::post_json`].
    pub fn post_json_value<S: Serialize>(&self, url: &str, value: &S) -> Result<String> {
        let json =
            serde_json::to_string(value).map_err(|e| HttpError::Serialization(e.to_string()))?;
        self.post_json(url, &json)
    }

    pub fn post_xml(&self, url: &str, xml: &str) -> Result<String> {
        self.send(&RequestSpec::post(url, xml).content_type("text/xml"))
    }

    /// Execute `spec` and decode the response. Non-200 becomes `HttpError::Status`.
    pub fn send(&self, spec: &RequestSpec) -> Result<String> {
        let connection = self.execute(spec)?;
        self.decode(connection)?.into_result()
    }

    /// Build and send the request without reading the response.
    pub fn execute(&self, spec: &RequestSpec) -> Result<T::Connection> {
        let request = self.build_request(spec);
        debug!(method = request.method.as_str(), url = %request.url, "sending request");
        self.transport.send(&request)
    }

    /// Layer charset, content type and caller headers onto a new request.
    ///
    /// `Accept-Charset` is always set, `Content-Type` only when non-empty,
    /// then caller headers in order, overwriting same-named entries. POST
    /// additionally gets the body and the configured connect timeout.
    pub fn build_request(&self, spec: &RequestSpec) -> HttpRequest {
        let mut request = HttpRequest::new(spec.method(), spec.url());
        if spec.method() == HttpMethod::Post {
            request.connect_timeout = Some(self.config.connect_timeout);
        }

        request.set_header(
            ACCEPT_CHARSET,
            spec.charset_value().unwrap_or(DEFAULT_REQUEST_CHARSET),
        );
        if let Some(content_type) = spec.content_type_value().filter(|ct| !ct.is_empty()) {
            request.set_header(CONTENT_TYPE, content_type);
        }
        for (name, value) in spec.header_list() {
            request.set_header(name, value);
        }

        if spec.method() == HttpMethod::Post {
            request.body = spec.body().map(str::to_owned);
        }
        request
    }

    /// Read the response to completion.
    ///
    /// Errors only when reading an existing stream fails or a 200 body
    /// declares an unknown charset; a non-200 status is always a `Failure`
    /// outcome, its error body decoded with the reader default if need be.
    pub fn decode<C: Connection>(&self, connection: C) -> Result<ResponseOutcome> {
        let status = connection.status();
        let charset = charset_of(connection.header(CONTENT_TYPE));
        debug!(status, charset = charset.as_deref(), "decoding response");

        if status == 200 {
            let body = read_text(connection.into_body(), charset.as_deref())?;
            return Ok(ResponseOutcome::Success { body });
        }

        let body = match connection.into_error_body() {
            Some(stream) => Some(read_text_lenient(stream, charset.as_deref())?),
            None => None,
        };
        Ok(ResponseOutcome::Failure { status, body })
    }
}
