use serde_json::to_value;

use crate::endpoints::Endpoints;
use crate::model::{LoginForm, LoginResponse};
use crate::navigate::{Navigator, Route};
use crate::notify::{messages, Notifier};
use crate::session::SessionStore;
use crate::transport::{ApiRequest, Method, Transport};
use crate::ClientError;

/// Logs a user in and establishes the session.
///
/// On a successful response the token and user are written to the session
/// store together, a success notice fires, and navigation goes to the admin
/// dashboard for admins or the clubs list for members. On failure the store
/// is left untouched.
pub struct LoginAction<T, S, N, V> {
    transport: T,
    endpoints: Endpoints,
    session: S,
    notifier: N,
    navigator: V,
}

impl<T, S, N, V> LoginAction<T, S, N, V>
where
    T: Transport,
    S: SessionStore,
    N: Notifier,
    V: Navigator,
{
    pub fn new(transport: T, endpoints: Endpoints, session: S, notifier: N, navigator: V) -> Self {
        LoginAction {
            transport,
            endpoints,
            session,
            notifier,
            navigator,
        }
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "login", skip_all, err)
    )]
    pub async fn execute(&self, form: &LoginForm) -> Result<LoginResponse, ClientError> {
        let notice = self.notifier.loading(messages::progress::SIGNING_IN);

        let result = self
            .transport
            .send(ApiRequest::new(Method::Post, self.endpoints.login()).json(to_value(form)?))
            .await;
        self.notifier.dismiss(notice);

        let response: LoginResponse = match result {
            Ok(value) => serde_json::from_value(value)?,
            Err(err) => {
                self.notifier
                    .error(&messages::auth::login_error(err.server_message()));
                return Err(err);
            }
        };

        match (&response.token, &response.user) {
            (Some(token), Some(user)) if response.success => {
                self.session.set(token, user)?;
                self.notifier.success(messages::auth::LOGIN_SUCCESS);

                log::info!(
                    target: "clubhouse::auth",
                    "msg=\"login success\" user_id={} role={}",
                    user.id,
                    user.role
                );

                self.navigator.navigate(if user.role.is_admin() {
                    Route::AdminDashboard
                } else {
                    Route::Clubs
                });
            }
            _ => {
                self.notifier
                    .error(&messages::auth::login_error(response.message.as_deref()));
            }
        }

        Ok(response)
    }
}
