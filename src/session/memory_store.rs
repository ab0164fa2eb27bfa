//! In-memory session storage.
//!
//! Holds the same two raw string keys a persistent backend would, so
//! malformed records behave identically across backends.

use std::sync::{Arc, RwLock};

use crate::model::SessionUser;
use crate::ClientError;

use super::store::SessionStore;
use super::Session;

#[derive(Debug, Default)]
struct StoredKeys {
    token: Option<String>,
    user: Option<String>,
}

/// In-process session storage. Cheap to clone; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    keys: Arc<RwLock<StoredKeys>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Injects raw key values, bypassing serialization. Lets tests place a
    /// corrupt user record the way a hostile or buggy writer could.
    #[cfg(any(test, feature = "mocks"))]
    pub fn insert_raw(&self, token: Option<&str>, user: Option<&str>) {
        let mut keys = self.keys.write().unwrap_or_else(|e| e.into_inner());
        keys.token = token.map(str::to_owned);
        keys.user = user.map(str::to_owned);
    }
}

impl SessionStore for MemorySessionStore {
    fn set(&self, token: &str, user: &SessionUser) -> Result<(), ClientError> {
        let serialized = serde_json::to_string(user)?;
        let mut keys = self
            .keys
            .write()
            .map_err(|_| ClientError::Storage("lock poisoned".to_owned()))?;
        keys.token = Some(token.to_owned());
        keys.user = Some(serialized);
        Ok(())
    }

    fn get(&self) -> Result<Option<Session>, ClientError> {
        let keys = self
            .keys
            .read()
            .map_err(|_| ClientError::Storage("lock poisoned".to_owned()))?;

        let (Some(token), Some(user)) = (&keys.token, &keys.user) else {
            return Ok(None);
        };

        let user: SessionUser = serde_json::from_str(user)
            .map_err(|e| ClientError::CorruptSession(e.to_string()))?;

        Ok(Some(Session::new(token.clone(), user)))
    }

    fn clear(&self) -> Result<(), ClientError> {
        let mut keys = self
            .keys
            .write()
            .map_err(|_| ClientError::Storage("lock poisoned".to_owned()))?;
        keys.token = None;
        keys.user = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn user() -> SessionUser {
        SessionUser {
            id: "u1".to_owned(),
            name: "A".to_owned(),
            email: "a@b.com".to_owned(),
            role: Role::Member,
        }
    }

    #[test]
    fn test_set_then_get() {
        let store = MemorySessionStore::new();
        store.set("T", &user()).unwrap();

        let session = store.get().unwrap().unwrap();
        assert_eq!(session.token, "T");
        assert_eq!(session.user.id, "u1");
    }

    #[test]
    fn test_absent_by_default() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_either_key_missing_reads_as_absent() {
        let store = MemorySessionStore::new();
        store.insert_raw(Some("T"), None);
        assert_eq!(store.get().unwrap(), None);

        store.insert_raw(None, Some(r#"{"id":"u1","role":"member"}"#));
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_corrupt_user_record_propagates() {
        let store = MemorySessionStore::new();
        store.insert_raw(Some("T"), Some("{not json"));

        let err = store.get().unwrap_err();
        assert!(matches!(err, ClientError::CorruptSession(_)));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = MemorySessionStore::new();
        store.set("T", &user()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemorySessionStore::new();
        let other = store.clone();
        store.set("T", &user()).unwrap();
        assert!(other.get().unwrap().is_some());
    }
}
