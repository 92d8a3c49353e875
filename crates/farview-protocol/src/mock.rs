//! Mock input sink for testing.

use std::sync::{Arc, Mutex};

use farview_types::{ButtonAction, InputCommand, MouseButton};

use crate::error::SinkError;
use crate::InputSink;

/// Mock [`InputSink`] that records every command it receives.
#[derive(Default)]
pub struct MockSink {
    commands: Arc<Mutex<Vec<InputCommand>>>,
}

impl MockSink {
    /// Create a new recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a clonable handle for observing sent commands from tests.
    #[must_use]
    pub fn handle(&self) -> MockSinkHandle {
        MockSinkHandle {
            commands: Arc::clone(&self.commands),
        }
    }

    fn record(&self, cmd: InputCommand) {
        self.commands.lock().unwrap().push(cmd);
    }
}

/// Clonable observer handle for [`MockSink`].
#[derive(Clone)]
pub struct MockSinkHandle {
    commands: Arc<Mutex<Vec<InputCommand>>>,
}

impl MockSinkHandle {
    /// Get a snapshot of all commands sent so far.
    pub fn commands(&self) -> Vec<InputCommand> {
        self.commands.lock().unwrap().clone()
    }

    /// Number of commands sent so far.
    pub fn len(&self) -> usize {
        self.commands.lock().unwrap().len()
    }

    /// Whether no commands have been sent.
    pub fn is_empty(&self) -> bool {
        self.commands.lock().unwrap().is_empty()
    }

    /// Drop all recorded commands.
    pub fn clear(&self) {
        self.commands.lock().unwrap().clear();
    }
}

impl InputSink for MockSink {
    fn send_button_event(
        &self,
        action: ButtonAction,
        button: MouseButton,
    ) -> Result<(), SinkError> {
        self.record(InputCommand::Button { action, button });
        Ok(())
    }

    fn send_move_event(&self, dx: i16, dy: i16) -> Result<(), SinkError> {
        self.record(InputCommand::Move { dx, dy });
        Ok(())
    }

    fn send_position_event(
        &self,
        x: i16,
        y: i16,
        reference_width: i16,
        reference_height: i16,
    ) -> Result<(), SinkError> {
        self.record(InputCommand::Position {
            x,
            y,
            reference_width,
            reference_height,
        });
        Ok(())
    }

    fn send_scroll_event(&self, delta: i8) -> Result<(), SinkError> {
        self.record(InputCommand::Scroll { delta });
        Ok(())
    }
}
