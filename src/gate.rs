//! Authorization gates.
//!
//! Every protected view calls a gate on mount, before rendering or fetching
//! anything. A failed gate notifies, redirects, and yields `None`; the view
//! then aborts. A corrupt stored user record is NOT treated as "logged out":
//! it propagates to the caller (see the session store contract).

use crate::navigate::{Navigator, Route};
use crate::notify::{messages, Notifier};
use crate::session::{Session, SessionStore};
use crate::ClientError;

/// Requires an authenticated session.
///
/// Absent session: notifies "login required", navigates to the login route,
/// returns `Ok(None)`.
///
/// # Errors
///
/// Propagates `ClientError::CorruptSession` from the store unchanged.
pub fn require_auth<S, N, V>(
    store: &S,
    notifier: &N,
    navigator: &V,
) -> Result<Option<Session>, ClientError>
where
    S: SessionStore,
    N: Notifier,
    V: Navigator,
{
    match store.get()? {
        Some(session) => Ok(Some(session)),
        None => {
            notifier.error(messages::permission::LOGIN_REQUIRED);
            navigator.navigate(Route::Login);
            Ok(None)
        }
    }
}

/// Requires an authenticated session with the admin role.
///
/// Authenticated but not admin: notifies "admin required", navigates to the
/// clubs list, returns `Ok(None)`.
pub fn require_admin<S, N, V>(
    store: &S,
    notifier: &N,
    navigator: &V,
) -> Result<Option<Session>, ClientError>
where
    S: SessionStore,
    N: Notifier,
    V: Navigator,
{
    let Some(session) = require_auth(store, notifier, navigator)? else {
        return Ok(None);
    };

    if session.is_admin() {
        Ok(Some(session))
    } else {
        notifier.error(messages::permission::ADMIN_REQUIRED);
        navigator.navigate(Route::Clubs);
        Ok(None)
    }
}
