//! Notifier backed by the `log` facade.

use super::{Notifier, NoticeId};

/// Routes notices through `log` under the `clubhouse::notify` target.
///
/// Useful for headless consumers (CLIs, integration harnesses) where no
/// toast surface exists.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for LogNotifier {
    fn loading(&self, message: &str) -> NoticeId {
        let id = NoticeId::next();
        log::info!(target: "clubhouse::notify", "notice=loading id={:?} msg=\"{}\"", id, message);
        id
    }

    fn success(&self, message: &str) {
        log::info!(target: "clubhouse::notify", "notice=success msg=\"{}\"", message);
    }

    fn error(&self, message: &str) {
        log::error!(target: "clubhouse::notify", "notice=error msg=\"{}\"", message);
    }

    fn dismiss(&self, id: NoticeId) {
        log::debug!(target: "clubhouse::notify", "notice=dismiss id={:?}", id);
    }
}
