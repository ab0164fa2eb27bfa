//! Client-side session state.
//!
//! A session is the pair of an opaque bearer token and the user record it
//! belongs to. The two are persisted as exactly two keys — `token` (raw
//! string) and `user` (JSON) — and are set and cleared together: a consumer
//! must never treat a user as authenticated unless both are present and
//! parseable.
//!
//! There is no client-side expiry. Validity is determined by presence alone;
//! a stale token simply surfaces as a backend "Unauthorized" on the next
//! gated call.

mod file_store;
mod memory_store;
mod store;

pub use file_store::FileSessionStore;
pub use memory_store::MemorySessionStore;
pub use store::SessionStore;

use crate::model::SessionUser;

/// The authenticated identity held by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl Session {
    pub fn new(token: impl Into<String>, user: SessionUser) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// True when the session's user carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.user.role.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn user(role: Role) -> SessionUser {
        SessionUser {
            id: "u1".to_owned(),
            name: "A".to_owned(),
            email: "a@b.com".to_owned(),
            role,
        }
    }

    #[test]
    fn test_is_admin() {
        assert!(Session::new("T", user(Role::Admin)).is_admin());
        assert!(!Session::new("T", user(Role::Member)).is_admin());
    }
}
