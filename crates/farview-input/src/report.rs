//! Batched absolute-position reporting.
//!
//! The event thread overwrites the report with each absolute motion sample;
//! the dispatch timer picks up at most the latest one per tick. The writer
//! takes a blocking lock (the critical section is four field assignments),
//! the reader only ever tries the lock so the timer can never stall behind
//! the event thread. Intermediate samples are superseded, never queued.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError, TryLockError};

/// One absolute pointer sample plus the window size it was taken against.
///
/// The window size travels with the sample because the window can resize
/// between the sample and its dispatch; the video region must be computed
/// from the size that was current when the position was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionSnapshot {
    pub x: i32,
    pub y: i32,
    pub window_width: i32,
    pub window_height: i32,
}

/// Last-writer-wins slot for the pending absolute position.
#[derive(Debug, Default)]
pub struct PositionReport {
    slot: Mutex<PositionSnapshot>,
    updated: AtomicBool,
}

impl PositionReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the pending sample. Event-thread side; blocks only for the
    /// duration of the reader's four-field copy, if at all.
    ///
    /// The `updated` flag is raised after the lock is released, so a reader
    /// that observes the flag and wins the lock always sees a complete
    /// snapshot.
    pub fn store(&self, snapshot: PositionSnapshot) {
        {
            let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
            *slot = snapshot;
        }
        self.updated.store(true, Ordering::SeqCst);
    }

    /// Atomically test and clear the pending flag. Timer side.
    #[must_use]
    pub fn take_updated(&self) -> bool {
        self.updated.swap(false, Ordering::SeqCst)
    }

    /// Try to read the pending sample without blocking. Timer side.
    ///
    /// `None` means the event thread is mid-write; its write finishes by
    /// raising the flag again, so the sample is reconsidered next tick.
    #[must_use]
    pub fn try_read(&self) -> Option<PositionSnapshot> {
        match self.slot.try_lock() {
            Ok(slot) => Some(*slot),
            Err(TryLockError::Poisoned(poisoned)) => Some(*poisoned.into_inner()),
            Err(TryLockError::WouldBlock) => None,
        }
    }
}
