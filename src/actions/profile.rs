use serde_json::Value;

use crate::endpoints::Endpoints;
use crate::transport::{ApiRequest, Method, Transport};
use crate::ClientError;

/// Read-only probe of the profile endpoint.
///
/// Returns the raw response; no notification, no store mutation. Relies on
/// the transport's cookie credentials rather than a bearer token.
pub struct GetProfileAction<T> {
    transport: T,
    endpoints: Endpoints,
}

impl<T: Transport> GetProfileAction<T> {
    pub fn new(transport: T, endpoints: Endpoints) -> Self {
        GetProfileAction {
            transport,
            endpoints,
        }
    }

    pub async fn execute(&self) -> Result<Value, ClientError> {
        self.transport
            .send(ApiRequest::new(Method::Get, self.endpoints.profile()))
            .await
    }
}
