//! Lock-free relative-motion accumulation.
//!
//! The event thread adds raw hardware deltas as they arrive; the dispatch
//! timer drains the sums once per tick. Neither side ever blocks.

use std::sync::atomic::{AtomicI32, Ordering};

/// Accumulated relative motion since the last drain.
#[derive(Debug, Default)]
pub struct DeltaAccumulator {
    dx: AtomicI32,
    dy: AtomicI32,
}

impl DeltaAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a motion delta. Called from the event thread; no clamping, no
    /// coordinate mapping — relative deltas are forwarded as raw hardware
    /// deltas.
    pub fn accumulate(&self, xrel: i32, yrel: i32) {
        self.dx.fetch_add(xrel, Ordering::Relaxed);
        self.dy.fetch_add(yrel, Ordering::Relaxed);
    }

    /// Atomically take the accumulated deltas, resetting them to zero.
    ///
    /// The result is narrowed to the protocol's 16-bit width. Sums beyond
    /// 16 bits truncate; a tick period is far too short for a real pointer
    /// to get near that.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn drain(&self) -> (i16, i16) {
        let dx = self.dx.swap(0, Ordering::AcqRel);
        let dy = self.dy.swap(0, Ordering::AcqRel);
        (dx as i16, dy as i16)
    }
}
