use std::{
    sync::{Condvar, Mutex},
    time::Duration,
};

/// A condvar-backed cancellation token shared between the main thread and
/// the worker threads. Once cancelled it stays cancelled, and cancelling
/// wakes any thread currently sleeping on it.
#[derive(Default)]
pub struct CancellationToken {
    cancelled: Mutex<bool>,
    cvar: Condvar,
}

impl CancellationToken {
    /// Mark the token as cancelled. Idempotent.
    pub fn cancel(&self) {
        let mut cancelled = self
            .cancelled
            .lock()
            .expect("cancellation token lock should not be poisoned");

        if !*cancelled {
            *cancelled = true;
            self.cvar.notify_all();
        }
    }

    /// Check the token without blocking. Returns `None` if the lock is
    /// currently held elsewhere.
    pub fn try_check(&self) -> Option<bool> {
        self.cancelled.try_lock().ok().map(|cancelled| *cancelled)
    }

    /// Sleep for up to `duration`, waking early if the token is cancelled.
    /// Returns whether the token is cancelled afterwards.
    pub fn sleep_with_cancellation(&self, duration: Duration) -> bool {
        let cancelled = self
            .cancelled
            .lock()
            .expect("cancellation token lock should not be poisoned");

        let (cancelled, _) = self
            .cvar
            .wait_timeout(cancelled, duration)
            .expect("cancellation token lock should not be poisoned");

        *cancelled
    }
}
