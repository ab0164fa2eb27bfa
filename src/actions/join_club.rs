use crate::endpoints::Endpoints;
use crate::model::MessageResponse;
use crate::notify::{messages, Notifier};
use crate::transport::{ApiRequest, Method, Transport};
use crate::ClientError;

/// Joins a club on behalf of the caller's token.
///
/// Not idempotent client-side: joining twice surfaces whatever error the
/// backend returns on the second call, verbatim.
pub struct JoinClubAction<T, N> {
    transport: T,
    endpoints: Endpoints,
    notifier: N,
}

impl<T, N> JoinClubAction<T, N>
where
    T: Transport,
    N: Notifier,
{
    pub fn new(transport: T, endpoints: Endpoints, notifier: N) -> Self {
        JoinClubAction {
            transport,
            endpoints,
            notifier,
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "join_club", skip_all, fields(club_id = %club_id), err)
    )]
    pub async fn execute(
        &self,
        club_id: &str,
        token: &str,
    ) -> Result<MessageResponse, ClientError> {
        let notice = self.notifier.loading(messages::progress::JOINING_CLUB);

        let result = self
            .transport
            .send(
                ApiRequest::new(Method::Post, self.endpoints.join_club(club_id)).bearer(token),
            )
            .await;
        self.notifier.dismiss(notice);

        match result {
            Ok(value) => {
                self.notifier.success(messages::club::JOIN_SUCCESS);
                Ok(serde_json::from_value(value)?)
            }
            Err(err) => {
                self.notifier
                    .error(&messages::club::join_error(err.server_message()));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::transport::{MockTransport, RequestBody};
    use serde_json::json;

    fn action() -> (JoinClubAction<MockTransport, RecordingNotifier>, MockTransport, RecordingNotifier)
    {
        let transport = MockTransport::new();
        let notifier = RecordingNotifier::new();
        let action = JoinClubAction::new(
            transport.clone(),
            Endpoints::new("https://host/api/v1"),
            notifier.clone(),
        );
        (action, transport, notifier)
    }

    #[tokio::test]
    async fn test_join_success() {
        let (action, transport, notifier) = action();
        transport.push_success(json!({"success": true, "message": "Joined"}));

        let response = action.execute("c1", "T").await.unwrap();

        assert!(response.success);
        assert!(notifier.saw_success(messages::club::JOIN_SUCCESS));

        let sent = transport.sent();
        assert_eq!(sent[0].url, "https://host/api/v1/clubs/join/c1");
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].bearer.as_deref(), Some("T"));
        // join sends the default empty body
        assert_eq!(sent[0].body, RequestBody::Json(json!({})));
    }

    #[tokio::test]
    async fn test_second_join_surfaces_backend_error() {
        let (action, transport, notifier) = action();
        transport.push_success(json!({"success": true}));
        transport.push_error(ClientError::Api {
            status: 400,
            message: Some("Already a member of this club".to_owned()),
        });

        action.execute("c1", "T").await.unwrap();
        let err = action.execute("c1", "T").await.unwrap_err();

        assert_eq!(err.server_message(), Some("Already a member of this club"));
        assert!(notifier.saw_error("Already a member of this club"));
    }

    #[tokio::test]
    async fn test_unauthorized_message_notified_verbatim() {
        let (action, transport, notifier) = action();
        transport.push_error(ClientError::Api {
            status: 401,
            message: Some("Unauthorized".to_owned()),
        });

        let err = action.execute("c1", "expired").await.unwrap_err();

        assert_eq!(err.server_message(), Some("Unauthorized"));
        assert!(notifier.saw_error("Unauthorized"));
    }

    #[tokio::test]
    async fn test_network_error_uses_fallback_message() {
        let (action, transport, notifier) = action();
        transport.push_error(ClientError::Network("connection refused".to_owned()));

        action.execute("c1", "T").await.unwrap_err();
        assert!(notifier.saw_error("Failed to join club. Please try again."));
    }
}
