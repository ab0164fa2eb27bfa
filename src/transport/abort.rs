//! Per-request cancellation.
//!
//! A view creates an [`AbortHandle`]/[`AbortSignal`] pair when it mounts,
//! attaches the signal to every request it issues, and fires the handle on
//! unmount. An in-flight request whose signal fires resolves to
//! [`ClientError::Aborted`](crate::ClientError::Aborted), so its result is
//! never applied to a view that no longer exists.

use tokio::sync::watch;

/// Fires the abort signal(s) cloned from this handle.
#[derive(Debug, Clone)]
pub struct AbortHandle {
    tx: watch::Sender<bool>,
}

impl AbortHandle {
    /// Aborts every request holding a signal from this pair. Idempotent.
    pub fn abort(&self) {
        let _ = self.tx.send(true);
    }
}

/// Cancellation signal carried by an [`ApiRequest`](super::ApiRequest).
#[derive(Debug, Clone)]
pub struct AbortSignal {
    rx: watch::Receiver<bool>,
}

impl AbortSignal {
    /// True once the paired handle has fired.
    pub fn is_aborted(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves when the paired handle fires.
    ///
    /// If the handle is dropped without firing, this pends forever; the
    /// request future then settles on its own.
    pub async fn aborted(&self) {
        let mut rx = self.rx.clone();
        if *rx.borrow() {
            return;
        }
        loop {
            if rx.changed().await.is_err() {
                // sender gone without aborting
                std::future::pending::<()>().await;
            }
            if *rx.borrow() {
                return;
            }
        }
    }
}

/// Creates a connected handle/signal pair.
pub fn abort_pair() -> (AbortHandle, AbortSignal) {
    let (tx, rx) = watch::channel(false);
    (AbortHandle { tx }, AbortSignal { rx })
}
