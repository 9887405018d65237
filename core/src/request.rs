//! Caller-facing description of a request.

use crate::http::HttpMethod;

/// Content type of a POST that does not name one.
pub const DEFAULT_POST_CONTENT_TYPE: &str = "text/plain";

/// Everything a caller can configure about one request.
///
/// A body exists exactly when the method is POST: `get` never takes one and
/// `post` always does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    method: HttpMethod,
    url: String,
    headers: Vec<(String, String)>,
    content_type: Option<String>,
    charset: Option<String>,
    body: Option<String>,
}

impl RequestSpec {
    pub fn get(url: &str) -> Self {
        Self::new(HttpMethod::Get, url, None)
    }

    /// A POST sent as `text/plain` unless [`RequestSpec::content_type`]
    /// says otherwise; `content_type("")` sends no `Content-Type` at all.
    pub fn post(url: &str, body: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url, Some(body.into())).content_type(DEFAULT_POST_CONTENT_TYPE)
    }

    fn new(method: HttpMethod, url: &str, body: Option<String>) -> Self {
        Self {
            method,
            url: url.to_string(),
            headers: Vec::new(),
            content_type: None,
            charset: None,
            body,
        }
    }

    /// Add a header. The value is stored in its `Display` form.
    pub fn header(mut self, name: &str, value: impl ToString) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.to_string())));
        self
    }

    /// An empty content type is the same as none at all.
    pub fn content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }

    /// Charset advertised through `Accept-Charset`. Does not change how the
    /// body is written.
    pub fn charset(mut self, charset: &str) -> Self {
        self.charset = Some(charset.to_string());
        self
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn header_list(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn content_type_value(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn charset_value(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }
}
