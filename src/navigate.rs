//! Navigation side effects.
//!
//! Operations and gates trigger route transitions through an injected
//! [`Navigator`] capability; the routing mechanics themselves live in the
//! consuming application.

#[cfg(any(test, feature = "mocks"))]
use std::sync::{Arc, Mutex};

/// The paths the client can transition to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    Clubs,
    ClubDetails(String),
    AdminDashboard,
    AdminCreateClub,
    AdminEditClub(String),
}

impl Route {
    /// The path string for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_owned(),
            Route::Login => "/login".to_owned(),
            Route::Signup => "/signup".to_owned(),
            Route::Clubs => "/clubs".to_owned(),
            Route::ClubDetails(id) => format!("/clubs/{id}"),
            Route::AdminDashboard => "/admin/dashboard".to_owned(),
            Route::AdminCreateClub => "/admin/create-club".to_owned(),
            Route::AdminEditClub(id) => format!("/admin/edit-club/{id}"),
        }
    }
}

/// Capability to trigger a route transition.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Records every navigation for assertions. Clones share the log.
#[cfg(any(test, feature = "mocks"))]
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<Route>>>,
}

#[cfg(any(test, feature = "mocks"))]
#[allow(clippy::unwrap_used)]
impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every route navigated to so far, in order.
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }

    /// The most recent navigation, if any.
    pub fn last(&self) -> Option<Route> {
        self.routes.lock().unwrap().last().cloned()
    }
}

#[cfg(any(test, feature = "mocks"))]
#[allow(clippy::unwrap_used)]
impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        log::debug!(target: "clubhouse::navigate", "navigate path={}", route.path());
        self.routes.lock().unwrap().push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::Signup.path(), "/signup");
        assert_eq!(Route::Clubs.path(), "/clubs");
        assert_eq!(Route::AdminDashboard.path(), "/admin/dashboard");
        assert_eq!(Route::AdminCreateClub.path(), "/admin/create-club");
    }

    #[test]
    fn test_parameterized_paths() {
        assert_eq!(Route::ClubDetails("c1".to_owned()).path(), "/clubs/c1");
        assert_eq!(
            Route::AdminEditClub("c1".to_owned()).path(),
            "/admin/edit-club/c1"
        );
    }

    #[test]
    fn test_recording_navigator() {
        let navigator = RecordingNavigator::new();
        assert_eq!(navigator.last(), None);

        navigator.navigate(Route::Login);
        navigator.navigate(Route::Clubs);
        assert_eq!(navigator.last(), Some(Route::Clubs));
        assert_eq!(navigator.routes().len(), 2);
    }
}
