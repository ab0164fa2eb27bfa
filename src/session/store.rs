//! Session store trait.

use crate::model::SessionUser;
use crate::ClientError;

use super::Session;

/// Persisted session state with a `set`/`get`/`clear` lifecycle.
///
/// Reads and writes are synchronous; the backing storage is process-wide
/// (shared across views, and across restarts for persistent backends).
/// All session access goes through this trait; nothing else reads the
/// underlying storage.
///
/// Implementations:
/// - [`MemorySessionStore`](super::MemorySessionStore): in-process storage
/// - [`FileSessionStore`](super::FileSessionStore): directory-backed storage
///   surviving restarts
pub trait SessionStore: Send + Sync {
    /// Persists the token and user together.
    ///
    /// The write is atomic from the caller's perspective on the in-memory
    /// backend; the file backend is best-effort (two writes, token last, so
    /// a torn write reads back as absent rather than half-authenticated).
    fn set(&self, token: &str, user: &SessionUser) -> Result<(), ClientError>;

    /// Reads the persisted session.
    ///
    /// Returns `None` when either value is missing. A malformed stored token
    /// cannot occur (it is an opaque string); a malformed stored user record
    /// yields `ClientError::CorruptSession` and is NOT silently cleared.
    fn get(&self) -> Result<Option<Session>, ClientError>;

    /// Removes both values. Idempotent.
    fn clear(&self) -> Result<(), ClientError>;
}
