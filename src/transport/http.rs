//! reqwest-backed transport.

use async_trait::async_trait;
use serde_json::Value;

use super::{ApiRequest, Method, PartValue, RequestBody, Transport};
use crate::ClientError;

/// Issues requests over HTTP with credentials (cookies) included.
///
/// No retries and no timeout overrides; the platform defaults apply. Failures
/// normalize per the [`Transport`] contract.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with a cookie store enabled.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized, matching the behavior
    /// of `reqwest::Client::new`.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }

    /// Wraps an existing client, e.g. one with custom TLS settings.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }

    fn multipart_form(parts: Vec<super::Part>) -> Result<reqwest::multipart::Form, ClientError> {
        let mut form = reqwest::multipart::Form::new();
        for part in parts {
            form = match part.value {
                PartValue::Text(text) => form.text(part.name, text),
                PartValue::File {
                    filename,
                    content_type,
                    bytes,
                } => {
                    let file = reqwest::multipart::Part::bytes(bytes)
                        .file_name(filename)
                        .mime_str(&content_type)
                        .map_err(|e| ClientError::Network(e.to_string()))?;
                    form.part(part.name, file)
                }
            };
        }
        Ok(form)
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ClientError> {
        let mut builder = self
            .client
            .request(Self::method(request.method), &request.url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        builder = match request.body {
            // GET carries no body; the default empty object is dropped.
            RequestBody::Json(_) if request.method == Method::Get => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(parts) => builder.multipart(Self::multipart_form(parts)?),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        log::debug!(
            target: "clubhouse::transport",
            "request method={} url={}",
            request.method.as_str(),
            request.url
        );

        let send = builder.send();
        let response = match &request.abort {
            Some(signal) => tokio::select! {
                biased;
                _ = signal.aborted() => {
                    log::debug!(
                        target: "clubhouse::transport",
                        "request aborted url={}",
                        request.url
                    );
                    return Err(ClientError::Aborted);
                }
                result = send => result,
            },
            None => send.await,
        }
        .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<Value>()
                .await
                .map_err(|e| ClientError::Serialization(e.to_string()));
        }

        // Error path: surface whatever message the backend sent.
        let body: Option<Value> = response.json().await.ok();
        let message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(Value::as_str)
            .map(str::to_owned);

        log::warn!(
            target: "clubhouse::transport",
            "request failed url={} status={} message={:?}",
            request.url,
            status.as_u16(),
            message
        );

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
