//! Mock windowing backend for testing.

use std::sync::Mutex;

use crate::WindowHandle;

/// Mock [`WindowHandle`] with a settable size.
#[derive(Debug)]
pub struct MockWindow {
    size: Mutex<(i32, i32)>,
}

impl MockWindow {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Mutex::new((width, height)),
        }
    }

    /// Simulate a window resize.
    pub fn set_size(&self, width: i32, height: i32) {
        *self.size.lock().unwrap() = (width, height);
    }
}

impl WindowHandle for MockWindow {
    fn size(&self) -> (i32, i32) {
        *self.size.lock().unwrap()
    }
}
