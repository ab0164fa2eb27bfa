//! User-facing notifications.
//!
//! Operations report outcomes through an injected [`Notifier`] capability
//! rather than a global toast singleton, so feedback is mockable in tests.
//! The exact message texts live in [`messages`]; backend-provided error
//! messages pass through verbatim with a per-flow generic fallback.

mod log_notifier;
pub mod messages;
#[cfg(any(test, feature = "mocks"))]
mod recording;

use std::sync::atomic::{AtomicU64, Ordering};

pub use log_notifier::LogNotifier;
#[cfg(any(test, feature = "mocks"))]
pub use recording::{Notice, RecordingNotifier};

static NEXT_NOTICE_ID: AtomicU64 = AtomicU64::new(1);

/// Handle to a loading notice, used to dismiss it once the operation settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

impl NoticeId {
    /// Mints a process-unique id. Implementations of [`Notifier`] call this
    /// from `loading`.
    pub fn next() -> Self {
        Self(NEXT_NOTICE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Transient user-visible feedback for an operation's outcome.
pub trait Notifier: Send + Sync {
    /// Shows a loading notice and returns its handle.
    fn loading(&self, message: &str) -> NoticeId;

    /// Shows a success notice.
    fn success(&self, message: &str);

    /// Shows an error notice.
    fn error(&self, message: &str);

    /// Dismisses a previously shown loading notice. Unknown ids are ignored.
    fn dismiss(&self, id: NoticeId);
}
