use crate::endpoints::Endpoints;
use crate::model::ClubResponse;
use crate::notify::{messages, Notifier};
use crate::transport::{AbortSignal, ApiRequest, Method, Transport};
use crate::ClientError;

/// Fetches a single club by id. Notifies only on failure.
pub struct GetClubAction<T, N> {
    transport: T,
    endpoints: Endpoints,
    notifier: N,
}

impl<T, N> GetClubAction<T, N>
where
    T: Transport,
    N: Notifier,
{
    pub fn new(transport: T, endpoints: Endpoints, notifier: N) -> Self {
        GetClubAction {
            transport,
            endpoints,
            notifier,
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "get_club", skip_all, fields(club_id = %club_id), err)
    )]
    pub async fn execute(
        &self,
        club_id: &str,
        token: &str,
        abort: Option<AbortSignal>,
    ) -> Result<ClubResponse, ClientError> {
        let mut request =
            ApiRequest::new(Method::Get, self.endpoints.club_by_id(club_id)).bearer(token);
        if let Some(signal) = abort {
            request = request.abort_signal(signal);
        }

        let parsed = match self.transport.send(request).await {
            Ok(value) => serde_json::from_value::<ClubResponse>(value),
            Err(ClientError::Aborted) => return Err(ClientError::Aborted),
            Err(err) => {
                self.notifier.error(&messages::club::fetch_error("club"));
                return Err(err);
            }
        };

        match parsed {
            Ok(response) => Ok(response),
            Err(err) => {
                self.notifier.error(&messages::club::fetch_error("club"));
                Err(err.into())
            }
        }
    }
}
