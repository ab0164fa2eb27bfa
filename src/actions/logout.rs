use crate::navigate::{Navigator, Route};
use crate::notify::{messages, Notifier};
use crate::session::SessionStore;

/// Ends the session.
///
/// Clears the session store unconditionally, notifies, and navigates home.
/// This operation cannot fail observably: a store error is logged and the
/// clear is retried, but the notification and navigation always happen.
pub struct LogoutAction<S, N, V> {
    session: S,
    notifier: N,
    navigator: V,
}

impl<S, N, V> LogoutAction<S, N, V>
where
    S: SessionStore,
    N: Notifier,
    V: Navigator,
{
    pub fn new(session: S, notifier: N, navigator: V) -> Self {
        LogoutAction {
            session,
            notifier,
            navigator,
        }
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(name = "logout", skip_all))]
    pub fn execute(&self) {
        if let Err(err) = self.session.clear() {
            log::warn!(
                target: "clubhouse::auth",
                "msg=\"session clear failed, retrying\" error=\"{}\"",
                err
            );
            let _ = self.session.clear();
        }

        self.notifier.success(messages::auth::LOGOUT_SUCCESS);
        self.navigator.navigate(Route::Home);

        log::info!(target: "clubhouse::auth", "msg=\"logout success\"");
    }
}
