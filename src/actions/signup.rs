use std::time::Duration;

use serde_json::to_value;

use crate::endpoints::Endpoints;
use crate::model::{SignupForm, SignupResponse};
use crate::navigate::{Navigator, Route};
use crate::notify::{messages, Notifier};
use crate::transport::{ApiRequest, Method, Transport};
use crate::ClientError;

/// Creates an account, then redirects to the login route.
///
/// Performs no validation itself; that is the submitting view's
/// responsibility. Never touches the session store — the user logs in
/// explicitly afterwards. The redirect is deferred by a configurable UX
/// debounce so the success notice is seen before the transition.
pub struct SignupAction<T, N, V> {
    transport: T,
    endpoints: Endpoints,
    notifier: N,
    navigator: V,
    redirect_delay: Duration,
}

impl<T, N, V> SignupAction<T, N, V>
where
    T: Transport,
    N: Notifier,
    V: Navigator,
{
    pub fn new(transport: T, endpoints: Endpoints, notifier: N, navigator: V) -> Self {
        SignupAction {
            transport,
            endpoints,
            notifier,
            navigator,
            redirect_delay: Duration::from_secs(1),
        }
    }

    /// Overrides the post-signup redirect debounce. Zero is valid.
    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "signup", skip_all, err)
    )]
    pub async fn execute(&self, form: &SignupForm) -> Result<SignupResponse, ClientError> {
        let notice = self.notifier.loading(messages::progress::CREATING_ACCOUNT);

        let result = self
            .transport
            .send(ApiRequest::new(Method::Post, self.endpoints.signup()).json(to_value(form)?))
            .await;
        self.notifier.dismiss(notice);

        let response: SignupResponse = match result {
            Ok(value) => serde_json::from_value(value)?,
            Err(err) => {
                self.notifier
                    .error(&messages::auth::signup_error(err.server_message()));
                return Err(err);
            }
        };

        if response.success {
            self.notifier.success(messages::auth::SIGNUP_SUCCESS);
            if !self.redirect_delay.is_zero() {
                tokio::time::sleep(self.redirect_delay).await;
            }
            self.navigator.navigate(Route::Login);
        } else {
            self.notifier
                .error(&messages::auth::signup_error(response.message.as_deref()));
        }

        Ok(response)
    }
}
