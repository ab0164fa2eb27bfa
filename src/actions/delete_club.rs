use crate::endpoints::Endpoints;
use crate::model::MessageResponse;
use crate::notify::{messages, Notifier};
use crate::transport::{ApiRequest, Method, Transport};
use crate::ClientError;

/// Deletes a club (admin only). DELETE to the id-specific URL, no body.
pub struct DeleteClubAction<T, N> {
    transport: T,
    endpoints: Endpoints,
    notifier: N,
}

impl<T, N> DeleteClubAction<T, N>
where
    T: Transport,
    N: Notifier,
{
    pub fn new(transport: T, endpoints: Endpoints, notifier: N) -> Self {
        DeleteClubAction {
            transport,
            endpoints,
            notifier,
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "delete_club", skip_all, fields(club_id = %club_id), err)
    )]
    pub async fn execute(
        &self,
        club_id: &str,
        token: &str,
    ) -> Result<MessageResponse, ClientError> {
        let notice = self.notifier.loading(messages::progress::DELETING_CLUB);

        let result = self
            .transport
            .send(
                ApiRequest::new(Method::Delete, self.endpoints.delete_club(club_id))
                    .bearer(token),
            )
            .await;
        self.notifier.dismiss(notice);

        match result {
            Ok(value) => {
                self.notifier.success(messages::club::DELETE_SUCCESS);
                Ok(serde_json::from_value(value)?)
            }
            Err(err) => {
                self.notifier
                    .error(&messages::club::delete_error(err.server_message()));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::transport::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_delete_targets_id_url() {
        let transport = MockTransport::new();
        let notifier = RecordingNotifier::new();
        let action = DeleteClubAction::new(
            transport.clone(),
            Endpoints::new("https://host/api/v1"),
            notifier.clone(),
        );
        transport.push_success(json!({"success": true, "message": "Club deleted"}));

        let response = action.execute("c1", "T").await.unwrap();

        assert!(response.success);
        assert!(notifier.saw_success(messages::club::DELETE_SUCCESS));
        let sent = transport.sent();
        assert_eq!(sent[0].url, "https://host/api/v1/clubs/c1");
        assert_eq!(sent[0].method, Method::Delete);
        assert_eq!(sent[0].bearer.as_deref(), Some("T"));
    }

    #[tokio::test]
    async fn test_delete_error_notifies_server_message() {
        let transport = MockTransport::new();
        let notifier = RecordingNotifier::new();
        let action = DeleteClubAction::new(
            transport.clone(),
            Endpoints::new("https://host/api/v1"),
            notifier.clone(),
        );
        transport.push_error(ClientError::Api {
            status: 404,
            message: Some("Club not found".to_owned()),
        });

        let err = action.execute("gone", "T").await.unwrap_err();

        assert_eq!(err.server_message(), Some("Club not found"));
        assert!(notifier.saw_error("Club not found"));
    }
}
