//! Scripted transport for tests.

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::{ApiRequest, Transport};
use crate::ClientError;

/// In-memory transport that replays scripted responses in order and records
/// every request it receives.
///
/// An exhausted script yields `ClientError::Network("no scripted response")`
/// so a test that issues one request too many fails loudly.
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<Result<Value, ClientError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response body.
    pub fn push_success(&self, body: Value) {
        self.responses.lock().unwrap().push_back(Ok(body));
    }

    /// Queues a failure.
    pub fn push_error(&self, error: ClientError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Every request sent so far, in order.
    pub fn sent(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests sent so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ClientError> {
        if let Some(signal) = &request.abort {
            if signal.is_aborted() {
                return Err(ClientError::Aborted);
            }
        }

        self.requests.lock().unwrap().push(request);

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Network("no scripted response".to_owned())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{abort_pair, Method};
    use serde_json::json;

    #[tokio::test]
    async fn test_replays_in_order_and_records() {
        let transport = MockTransport::new();
        transport.push_success(json!({"success": true}));
        transport.push_error(ClientError::Api {
            status: 400,
            message: Some("Already a member".to_owned()),
        });

        let first = transport
            .send(ApiRequest::new(Method::Post, "https://host/a"))
            .await;
        let second = transport
            .send(ApiRequest::new(Method::Post, "https://host/b"))
            .await;

        assert_eq!(first.unwrap(), json!({"success": true}));
        assert_eq!(
            second.unwrap_err().server_message(),
            Some("Already a member")
        );
        assert_eq!(transport.request_count(), 2);
        assert_eq!(transport.sent()[1].url, "https://host/b");
    }

    #[tokio::test]
    async fn test_exhausted_script_fails() {
        let transport = MockTransport::new();
        let result = transport
            .send(ApiRequest::new(Method::Get, "https://host/a"))
            .await;
        assert!(matches!(result, Err(ClientError::Network(_))));
    }

    #[tokio::test]
    async fn test_aborted_signal_short_circuits() {
        let transport = MockTransport::new();
        transport.push_success(json!({}));

        let (handle, signal) = abort_pair();
        handle.abort();

        let result = transport
            .send(ApiRequest::new(Method::Get, "https://host/a").abort_signal(signal))
            .await;

        assert_eq!(result, Err(ClientError::Aborted));
        // the aborted request never reaches the backend
        assert_eq!(transport.request_count(), 0);
    }
}
