//! Recording notifier for tests.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use super::{Notifier, NoticeId};

/// A notice captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Loading(String),
    Success(String),
    Error(String),
    Dismissed(NoticeId),
}

/// Captures every notice for later assertions. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every notice recorded so far, in order.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    /// The error messages recorded so far.
    pub fn errors(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter_map(|n| match n {
                Notice::Error(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    /// The success messages recorded so far.
    pub fn successes(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter_map(|n| match n {
                Notice::Success(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    /// True if an error with exactly this message was recorded.
    pub fn saw_error(&self, message: &str) -> bool {
        self.errors().iter().any(|m| m == message)
    }

    /// True if a success with exactly this message was recorded.
    pub fn saw_success(&self, message: &str) -> bool {
        self.successes().iter().any(|m| m == message)
    }
}

impl Notifier for RecordingNotifier {
    fn loading(&self, message: &str) -> NoticeId {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Loading(message.to_owned()));
        NoticeId::next()
    }

    fn success(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Success(message.to_owned()));
    }

    fn error(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Error(message.to_owned()));
    }

    fn dismiss(&self, id: NoticeId) {
        self.notices.lock().unwrap().push(Notice::Dismissed(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let notifier = RecordingNotifier::new();
        let id = notifier.loading("Joining club...");
        notifier.dismiss(id);
        notifier.error("Unauthorized");

        let notices = notifier.notices();
        assert_eq!(notices[0], Notice::Loading("Joining club...".to_owned()));
        assert_eq!(notices[1], Notice::Dismissed(id));
        assert!(notifier.saw_error("Unauthorized"));
        assert!(!notifier.saw_success("Unauthorized"));
    }
}
