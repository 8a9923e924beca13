// src/core/cancel.rs
//! One-shot broadcast cancellation.
//!
//! The token is a cloneable receiver on a channel that never carries a
//! message; cancellation is the sender being dropped, which every blocked
//! `select!` observes as a disconnect. Dropping is naturally idempotent
//! and can never be un-signaled.

use std::sync::Mutex;

use crossbeam_channel::{Receiver, Sender, TryRecvError, bounded};

/// Read side, cloned into the walker and every scanner worker.
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: Receiver<()>,
}

/// Write side, held by the pipeline. Cancels on drop so no exit path can
/// leave the workers blocked.
#[derive(Debug)]
pub struct CancelHandle {
    tx: Mutex<Option<Sender<()>>>,
}

/// Creates a connected handle/token pair for one pipeline run.
#[must_use]
pub fn pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = bounded(0);
    (
        CancelHandle {
            tx: Mutex::new(Some(tx)),
        },
        CancelToken { rx },
    )
}

impl CancelHandle {
    /// Signals cancellation. Safe to call any number of times.
    pub fn cancel(&self) {
        if let Ok(mut slot) = self.tx.lock() {
            slot.take();
        }
    }
}

impl Drop for CancelHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl CancelToken {
    /// Non-blocking check, usable between hand-offs.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        matches!(self.rx.try_recv(), Err(TryRecvError::Disconnected))
    }

    /// The raw receiver, for pairing blocking sends and receives with
    /// cancellation inside `select!`.
    #[must_use]
    pub fn signal(&self) -> &Receiver<()> {
        &self.rx
    }
}
