//! Remote-input command boundary for farview.
//!
//! This crate defines the [`InputSink`] trait that the input subsystem
//! emits commands through. The real implementation lives with the network
//! stack; [`ChannelSink`] forwards commands to it over an in-process
//! channel, and [`mock::MockSink`] records them for tests.

use farview_types::{ButtonAction, InputCommand, MouseButton};
use tokio::sync::mpsc;

pub mod error;
pub mod mock;

pub use error::SinkError;

/// Accepts discrete remote-input commands.
///
/// Implementations must not block: these methods are called from the OS
/// event thread and from the dispatch timer, neither of which may stall.
pub trait InputSink: Send + Sync {
    /// Forward a button press or release.
    fn send_button_event(&self, action: ButtonAction, button: MouseButton)
        -> Result<(), SinkError>;

    /// Forward batched relative motion.
    fn send_move_event(&self, dx: i16, dy: i16) -> Result<(), SinkError>;

    /// Forward an absolute position within a reference region.
    fn send_position_event(
        &self,
        x: i16,
        y: i16,
        reference_width: i16,
        reference_height: i16,
    ) -> Result<(), SinkError>;

    /// Forward a vertical scroll delta.
    fn send_scroll_event(&self, delta: i8) -> Result<(), SinkError>;
}

/// An [`InputSink`] that forwards commands over an unbounded channel.
///
/// The unbounded send keeps the caller non-blocking; the dispatch timer
/// already bounds the command rate, so the channel cannot grow without
/// bound in practice.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<InputCommand>,
}

impl ChannelSink {
    /// Create a sink and the receiver the network task drains.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<InputCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, cmd: InputCommand) -> Result<(), SinkError> {
        self.tx.send(cmd).map_err(|_| SinkError::Closed)
    }
}

impl InputSink for ChannelSink {
    fn send_button_event(
        &self,
        action: ButtonAction,
        button: MouseButton,
    ) -> Result<(), SinkError> {
        self.send(InputCommand::Button { action, button })
    }

    fn send_move_event(&self, dx: i16, dy: i16) -> Result<(), SinkError> {
        self.send(InputCommand::Move { dx, dy })
    }

    fn send_position_event(
        &self,
        x: i16,
        y: i16,
        reference_width: i16,
        reference_height: i16,
    ) -> Result<(), SinkError> {
        self.send(InputCommand::Position {
            x,
            y,
            reference_width,
            reference_height,
        })
    }

    fn send_scroll_event(&self, delta: i8) -> Result<(), SinkError> {
        self.send(InputCommand::Scroll { delta })
    }
}
