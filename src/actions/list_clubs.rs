use crate::endpoints::Endpoints;
use crate::model::{Club, ClubListResponse};
use crate::notify::{messages, Notifier};
use crate::transport::{AbortSignal, ApiRequest, Method, Transport};
use crate::ClientError;

/// Lists clubs: all of them, or only the caller's.
///
/// Reads are not celebratory — only failures notify. Both listings accept an
/// optional abort signal tied to the initiating view's lifetime.
pub struct ListClubsAction<T, N> {
    transport: T,
    endpoints: Endpoints,
    notifier: N,
}

impl<T, N> ListClubsAction<T, N>
where
    T: Transport,
    N: Notifier,
{
    pub fn new(transport: T, endpoints: Endpoints, notifier: N) -> Self {
        ListClubsAction {
            transport,
            endpoints,
            notifier,
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "list_all_clubs", skip_all, err)
    )]
    pub async fn all(
        &self,
        token: &str,
        abort: Option<AbortSignal>,
    ) -> Result<Vec<Club>, ClientError> {
        self.fetch(self.endpoints.all_clubs(), token, abort, "clubs")
            .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "list_my_clubs", skip_all, err)
    )]
    pub async fn mine(
        &self,
        token: &str,
        abort: Option<AbortSignal>,
    ) -> Result<Vec<Club>, ClientError> {
        self.fetch(self.endpoints.my_clubs(), token, abort, "your clubs")
            .await
    }

    async fn fetch(
        &self,
        url: String,
        token: &str,
        abort: Option<AbortSignal>,
        what: &str,
    ) -> Result<Vec<Club>, ClientError> {
        let mut request = ApiRequest::new(Method::Get, url).bearer(token);
        if let Some(signal) = abort {
            request = request.abort_signal(signal);
        }

        let parsed = match self.transport.send(request).await {
            Ok(value) => serde_json::from_value::<ClubListResponse>(value),
            Err(ClientError::Aborted) => return Err(ClientError::Aborted),
            Err(err) => {
                self.notifier.error(&messages::club::fetch_error(what));
                return Err(err);
            }
        };

        match parsed {
            Ok(response) => Ok(response.clubs),
            Err(err) => {
                self.notifier.error(&messages::club::fetch_error(what));
                Err(err.into())
            }
        }
    }
}
