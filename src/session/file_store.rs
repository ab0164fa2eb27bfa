//! File-based session storage.
//!
//! The process-wide, restart-surviving analogue of browser storage: a
//! directory holding the two keys as files, `token` and `user.json`.

use std::path::PathBuf;

use crate::model::SessionUser;
use crate::ClientError;

use super::store::SessionStore;
use super::Session;

/// Directory-backed session storage.
///
/// # Example
///
/// ```rust,ignore
/// use clubhouse::session::FileSessionStore;
///
/// let store = FileSessionStore::new("/var/lib/myapp/session")?;
/// ```
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    directory: PathBuf,
}

impl FileSessionStore {
    /// Creates the store, creating the directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Storage` if the directory cannot be created.
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self, ClientError> {
        let dir = directory.into();
        std::fs::create_dir_all(&dir)
            .map_err(|e| ClientError::Storage(format!("failed to create session directory: {e}")))?;
        Ok(Self { directory: dir })
    }

    fn token_path(&self) -> PathBuf {
        self.directory.join("token")
    }

    fn user_path(&self) -> PathBuf {
        self.directory.join("user.json")
    }

    fn read_key(&self, path: &PathBuf) -> Result<Option<String>, ClientError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ClientError::Storage(format!(
                "failed to read session key: {e}"
            ))),
        }
    }

    fn remove_key(&self, path: &PathBuf) -> Result<(), ClientError> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::Storage(format!(
                "failed to remove session key: {e}"
            ))),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn set(&self, token: &str, user: &SessionUser) -> Result<(), ClientError> {
        let serialized = serde_json::to_string(user)?;

        // user first, token last: a torn write leaves the token missing and
        // the session reads back as absent, never half-authenticated
        std::fs::write(self.user_path(), serialized)
            .map_err(|e| ClientError::Storage(format!("failed to write user record: {e}")))?;
        std::fs::write(self.token_path(), token)
            .map_err(|e| ClientError::Storage(format!("failed to write token: {e}")))?;
        Ok(())
    }

    fn get(&self) -> Result<Option<Session>, ClientError> {
        let (Some(token), Some(user)) = (
            self.read_key(&self.token_path())?,
            self.read_key(&self.user_path())?,
        ) else {
            return Ok(None);
        };

        let user: SessionUser = serde_json::from_str(&user)
            .map_err(|e| ClientError::CorruptSession(e.to_string()))?;

        Ok(Some(Session::new(token, user)))
    }

    fn clear(&self) -> Result<(), ClientError> {
        self.remove_key(&self.token_path())?;
        self.remove_key(&self.user_path())?;
        Ok(())
    }
}
