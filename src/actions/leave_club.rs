use crate::endpoints::Endpoints;
use crate::model::MessageResponse;
use crate::notify::{messages, Notifier};
use crate::transport::{ApiRequest, Method, Transport};
use crate::ClientError;

/// Leaves a club. Same contract as joining: not idempotent, backend errors
/// surface verbatim.
pub struct LeaveClubAction<T, N> {
    transport: T,
    endpoints: Endpoints,
    notifier: N,
}

impl<T, N> LeaveClubAction<T, N>
where
    T: Transport,
    N: Notifier,
{
    pub fn new(transport: T, endpoints: Endpoints, notifier: N) -> Self {
        LeaveClubAction {
            transport,
            endpoints,
            notifier,
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "leave_club", skip_all, fields(club_id = %club_id), err)
    )]
    pub async fn execute(
        &self,
        club_id: &str,
        token: &str,
    ) -> Result<MessageResponse, ClientError> {
        let notice = self.notifier.loading(messages::progress::LEAVING_CLUB);

        let result = self
            .transport
            .send(
                ApiRequest::new(Method::Post, self.endpoints.leave_club(club_id)).bearer(token),
            )
            .await;
        self.notifier.dismiss(notice);

        match result {
            Ok(value) => {
                self.notifier.success(messages::club::LEAVE_SUCCESS);
                Ok(serde_json::from_value(value)?)
            }
            Err(err) => {
                self.notifier
                    .error(&messages::club::leave_error(err.server_message()));
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
    async fn test_leave_success() {
        let transport = MockTransport::new();
        let notifier = RecordingNotifier::new();
        let action = LeaveClubAction::new(
            transport.clone(),
            Endpoints::new("https://host/api/v1"),
            notifier.clone(),
        );
        transport.push_success(json!({"success": true}));

        action.execute("c1", "T").await.unwrap();

        assert!(notifier.saw_success(messages::club::LEAVE_SUCCESS));
        assert_eq!(transport.sent()[0].url, "https://host/api/v1/clubs/leave/c1");
    }

    #[tokio::test]
    async fn test_leave_when_not_a_member_surfaces_error() {
        let transport = MockTransport::new();
        let notifier = RecordingNotifier::new();
        let action = LeaveClubAction::new(
            transport.clone(),
            Endpoints::new("https://host/api/v1"),
            notifier.clone(),
        );
        transport.push_error(ClientError::Api {
            status: 400,
            message: Some("Not a member of this club".to_owned()),
        });

        let err = action.execute("c1", "T").await.unwrap_err();

        assert_eq!(err.server_message(), Some("Not a member of this club"));
        assert!(notifier.saw_error("Not a member of this club"));
    }
}
