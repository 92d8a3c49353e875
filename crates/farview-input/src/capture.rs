//! Capture gate.
//!
//! While capture is inactive, no pointer state is forwarded or accumulated;
//! the pointer belongs to the local desktop. Capture is re-acquired on the
//! *release* of the primary button (see [`crate::handler::MouseHandler`]),
//! so the click that refocuses the window never reaches the remote host.

use std::sync::atomic::{AtomicBool, Ordering};

/// Whether pointer input is currently being forwarded to the remote session.
///
/// Written only by the event thread; read by every event handler and the
/// dispatch timer.
#[derive(Debug)]
pub struct CaptureState {
    active: AtomicBool,
}

impl CaptureState {
    #[must_use]
    pub fn new(active: bool) -> Self {
        Self {
            active: AtomicBool::new(active),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::SeqCst);
    }
}
