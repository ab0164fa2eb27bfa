//! Generic HTTP transport.
//!
//! One seam issues every backend request: [`Transport::send`] takes an
//! [`ApiRequest`] and resolves to the parsed response body, or normalizes the
//! failure into a [`ClientError`](crate::ClientError). Implementations:
//!
//! - [`HttpTransport`]: reqwest-backed, cookies included, no retries.
//! - [`MockTransport`] (`mocks` feature): scripted responses for tests.
//!
//! Every request may carry an [`AbortSignal`] tied to the initiating view's
//! lifetime; a fired signal resolves the call to `ClientError::Aborted` so a
//! late result is discarded instead of being applied to a dismissed view.

mod abort;
mod http;
#[cfg(any(test, feature = "mocks"))]
mod mock;

use async_trait::async_trait;
use serde_json::Value;

pub use abort::{abort_pair, AbortHandle, AbortSignal};
pub use http::HttpTransport;
#[cfg(any(test, feature = "mocks"))]
pub use mock::MockTransport;

use crate::ClientError;

/// HTTP method of an [`ApiRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// One field of a multipart body.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: String,
    pub value: PartValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartValue {
    Text(String),
    File {
        filename: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

impl Part {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: PartValue::Text(value.into()),
        }
    }

    pub fn file(
        name: impl Into<String>,
        filename: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            value: PartValue::File {
                filename: filename.into(),
                content_type: content_type.into(),
                bytes,
            },
        }
    }
}

/// Request body. JSON callers default to an empty object; multipart callers
/// override the `Content-Type` implicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Multipart(Vec<Part>),
}

impl Default for RequestBody {
    fn default() -> Self {
        RequestBody::Json(Value::Object(serde_json::Map::new()))
    }
}

/// A single backend request, built with a fluent API.
///
/// ```rust
/// use clubhouse::transport::{ApiRequest, Method};
///
/// let req = ApiRequest::new(Method::Post, "https://host/api/v1/clubs/join/c1")
///     .bearer("T")
///     .query("verbose", "1");
/// assert_eq!(req.url, "https://host/api/v1/clubs/join/c1");
/// ```
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: RequestBody,
    /// Extra headers, merged over the `Content-Type: application/json`
    /// default.
    pub headers: Vec<(String, String)>,
    /// Appended to the URL as a query string.
    pub query: Vec<(String, String)>,
    /// Bearer token for authenticated calls.
    pub bearer: Option<String>,
    /// Cancellation signal honored while the request is in flight.
    pub abort: Option<AbortSignal>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: RequestBody::default(),
            headers: Vec::new(),
            query: Vec::new(),
            bearer: None,
            abort: None,
        }
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn multipart(mut self, parts: Vec<Part>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    pub fn abort_signal(mut self, signal: AbortSignal) -> Self {
        self.abort = Some(signal);
        self
    }
}

/// Generic request executor.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues the request and returns the parsed response body.
    ///
    /// # Errors
    ///
    /// - `ClientError::Network` when no response was received
    /// - `ClientError::Api` for non-2xx responses, carrying the body's
    ///   `message` field when present
    /// - `ClientError::Aborted` when the request's abort signal fired first
    async fn send(&self, request: ApiRequest) -> Result<Value, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_as_str() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Put.as_str(), "PUT");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_default_body_is_empty_object() {
        let req = ApiRequest::new(Method::Post, "https://host/x");
        assert_eq!(req.body, RequestBody::Json(json!({})));
    }

    #[test]
    fn test_builder_accumulates() {
        let req = ApiRequest::new(Method::Get, "https://host/x")
            .header("X-Debug", "1")
            .query("page", "2")
            .bearer("T");

        assert_eq!(req.headers, vec![("X-Debug".to_owned(), "1".to_owned())]);
        assert_eq!(req.query, vec![("page".to_owned(), "2".to_owned())]);
        assert_eq!(req.bearer.as_deref(), Some("T"));
        assert!(req.abort.is_none());
    }

    #[test]
    fn test_multipart_parts() {
        let req = ApiRequest::new(Method::Post, "https://host/x").multipart(vec![
            Part::text("name", "Chess Club"),
            Part::file("image", "logo.png", "image/png", vec![1, 2, 3]),
        ]);

        match req.body {
            RequestBody::Multipart(parts) => {
                assert_eq!(parts.len(), 2);
                assert_eq!(parts[0], Part::text("name", "Chess Club"));
            }
            RequestBody::Json(_) => panic!("expected multipart body"),
        }
    }
}
