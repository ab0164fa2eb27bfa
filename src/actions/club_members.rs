use crate::endpoints::Endpoints;
use crate::model::{MembersResponse, UserRef};
use crate::notify::{messages, Notifier};
use crate::transport::{AbortSignal, ApiRequest, Method, Transport};
use crate::ClientError;

/// Lists a club's members. Notifies only on failure.
pub struct ClubMembersAction<T, N> {
    transport: T,
    endpoints: Endpoints,
    notifier: N,
}

impl<T, N> ClubMembersAction<T, N>
where
    T: Transport,
    N: Notifier,
{
    pub fn new(transport: T, endpoints: Endpoints, notifier: N) -> Self {
        ClubMembersAction {
            transport,
            endpoints,
            notifier,
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "club_members", skip_all, fields(club_id = %club_id), err)
    )]
    pub async fn execute(
        &self,
        club_id: &str,
        token: &str,
        abort: Option<AbortSignal>,
    ) -> Result<Vec<UserRef>, ClientError> {
        let mut request =
            ApiRequest::new(Method::Get, self.endpoints.club_members(club_id)).bearer(token);
        if let Some(signal) = abort {
            request = request.abort_signal(signal);
        }

        let parsed = match self.transport.send(request).await {
            Ok(value) => serde_json::from_value::<MembersResponse>(value),
            Err(ClientError::Aborted) => return Err(ClientError::Aborted),
            Err(err) => {
                self.notifier
                    .error(&messages::club::fetch_error("club members"));
                return Err(err);
            }
        };

        match parsed {
            Ok(response) => Ok(response.members),
            Err(err) => {
                self.notifier
                    .error(&messages::club::fetch_error("club members"));
                Err(err.into())
            }
        }
    }
}
