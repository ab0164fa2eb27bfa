use crate::endpoints::Endpoints;
use crate::model::{ClubForm, ClubResponse};
use crate::notify::{messages, Notifier};
use crate::transport::{ApiRequest, Method, Transport};
use crate::validators::validate_club;
use crate::ClientError;

/// Creates a club (admin only). Sends the form as multipart.
///
/// The action is this crate's submission surface, so it runs the club form
/// validation itself: a validation failure notifies and never reaches the
/// transport.
pub struct CreateClubAction<T, N> {
    transport: T,
    endpoints: Endpoints,
    notifier: N,
}

impl<T, N> CreateClubAction<T, N>
where
    T: Transport,
    N: Notifier,
{
    pub fn new(transport: T, endpoints: Endpoints, notifier: N) -> Self {
        CreateClubAction {
            transport,
            endpoints,
            notifier,
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "create_club", skip_all, err)
    )]
    pub async fn execute(&self, form: ClubForm, token: &str) -> Result<ClubResponse, ClientError> {
        if let Err(violation) = validate_club(&form) {
            self.notifier.error(&violation.to_string());
            return Err(violation.into());
        }

        let notice = self.notifier.loading(messages::progress::CREATING_CLUB);

        let result = self
            .transport
            .send(
                ApiRequest::new(Method::Post, self.endpoints.create_club())
                    .multipart(form.into_parts())
                    .bearer(token),
            )
            .await;
        self.notifier.dismiss(notice);

        match result {
            Ok(value) => {
                self.notifier.success(messages::club::CREATE_SUCCESS);
                Ok(serde_json::from_value(value)?)
            }
            Err(err) => {
                self.notifier
                    .error(&messages::club::create_error(err.server_message()));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClubCategory, ImageFile};
    use crate::notify::RecordingNotifier;
    use crate::transport::{MockTransport, RequestBody};
    use crate::validators::ValidationError;
    use serde_json::json;

    fn action() -> (
        CreateClubAction<MockTransport, RecordingNotifier>,
        MockTransport,
        RecordingNotifier,
    ) {
        let transport = MockTransport::new();
        let notifier = RecordingNotifier::new();
        let action = CreateClubAction::new(
            transport.clone(),
            Endpoints::new("https://host/api/v1"),
            notifier.clone(),
        );
        (action, transport, notifier)
    }

    fn valid_form() -> ClubForm {
        ClubForm {
            name: "Chess Club".to_owned(),
            description: "We play chess on Thursdays.".to_owned(),
            category: Some(ClubCategory::Gaming),
            image: Some(ImageFile {
                filename: "logo.png".to_owned(),
                content_type: "image/png".to_owned(),
                bytes: vec![1, 2, 3],
            }),
        }
    }

    #[tokio::test]
    async fn test_create_sends_multipart_with_token() {
        let (action, transport, notifier) = action();
        transport.push_success(json!({"success": true, "club": {
            "_id": "c1", "name": "Chess Club", "category": "Gaming",
        }}));

        let response = action.execute(valid_form(), "T").await.unwrap();

        assert_eq!(response.club.unwrap().id, "c1");
        assert!(notifier.saw_success(messages::club::CREATE_SUCCESS));

        let sent = transport.sent();
        assert_eq!(sent[0].url, "https://host/api/v1/clubs/create");
        assert_eq!(sent[0].bearer.as_deref(), Some("T"));
        match &sent[0].body {
            RequestBody::Multipart(parts) => {
                assert!(parts.iter().any(|p| p.name == "name"));
                assert!(parts.iter().any(|p| p.name == "category"));
                assert!(parts.iter().any(|p| p.name == "image"));
            }
            RequestBody::Json(_) => panic!("expected multipart body"),
        }
    }

    #[tokio::test]
    async fn test_short_description_never_reaches_transport() {
        let (action, transport, notifier) = action();

        let form = ClubForm {
            description: "too short".to_owned(),
            ..valid_form()
        };
        let err = action.execute(form, "T").await.unwrap_err();

        assert!(matches!(err, ClientError::Validation(_)));
        assert!(notifier.saw_error("Please enter a valid description (minimum 10 characters)"));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_two_character_name_reports_exact_message() {
        let (action, transport, notifier) = action();

        let form = ClubForm {
            name: "Ch".to_owned(),
            ..valid_form()
        };
        let err = action.execute(form, "T").await.unwrap_err();

        assert_eq!(
            err,
            ClientError::Validation(ValidationError::InvalidField(
                "club name (minimum 3 characters)".to_owned()
            ))
        );
        assert!(notifier.saw_error("Please enter a valid club name (minimum 3 characters)"));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_backend_error_notifies_and_rethrows() {
        let (action, transport, notifier) = action();
        transport.push_error(ClientError::Api {
            status: 403,
            message: Some("Admin privileges required".to_owned()),
        });

        let err = action.execute(valid_form(), "T").await.unwrap_err();

        assert_eq!(err.server_message(), Some("Admin privileges required"));
        assert!(notifier.saw_error("Admin privileges required"));
    }
}
