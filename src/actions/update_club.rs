use crate::endpoints::Endpoints;
use crate::model::{ClubForm, ClubResponse};
use crate::notify::{messages, Notifier};
use crate::transport::{ApiRequest, Method, Transport};
use crate::validators::validate_club;
use crate::ClientError;

/// Updates a club (admin only). PUT with a multipart body, same validation
/// and notification contract as creation.
pub struct UpdateClubAction<T, N> {
    transport: T,
    endpoints: Endpoints,
    notifier: N,
}

impl<T, N> UpdateClubAction<T, N>
where
    T: Transport,
    N: Notifier,
{
    pub fn new(transport: T, endpoints: Endpoints, notifier: N) -> Self {
        UpdateClubAction {
            transport,
            endpoints,
            notifier,
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "update_club", skip_all, fields(club_id = %club_id), err)
    )]
    pub async fn execute(
        &self,
        club_id: &str,
        form: ClubForm,
        token: &str,
    ) -> Result<ClubResponse, ClientError> {
        if let Err(violation) = validate_club(&form) {
            self.notifier.error(&violation.to_string());
            return Err(violation.into());
        }

        let notice = self.notifier.loading(messages::progress::UPDATING_CLUB);

        let result = self
            .transport
            .send(
                ApiRequest::new(Method::Put, self.endpoints.update_club(club_id))
                    .multipart(form.into_parts())
                    .bearer(token),
            )
            .await;
        self.notifier.dismiss(notice);

        match result {
            Ok(value) => {
                self.notifier.success(messages::club::UPDATE_SUCCESS);
                Ok(serde_json::from_value(value)?)
            }
            Err(err) => {
                self.notifier
                    .error(&messages::club::update_error(err.server_message()));
                Err(err)
            }
        }
    }
}
