//! Outbound remote-input commands.
//!
//! These are the discrete commands handed to the remote-input protocol
//! library, which owns their wire encoding. Field widths match what the
//! protocol accepts: 16-bit motion/position values and an 8-bit scroll
//! delta.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Press or release half of a button event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
pub enum ButtonAction {
    Press,
    Release,
}

/// Mouse button identifier in the remote-input protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
    Aux1,
    Aux2,
}

/// A single remote-input command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub enum InputCommand {
    /// Button press or release.
    Button {
        action: ButtonAction,
        button: MouseButton,
    },

    /// Relative pointer motion (raw hardware delta, batched per tick).
    Move { dx: i16, dy: i16 },

    /// Absolute pointer position within the video region, together with the
    /// region dimensions the position is relative to.
    Position {
        x: i16,
        y: i16,
        reference_width: i16,
        reference_height: i16,
    },

    /// Vertical scroll.
    Scroll { delta: i8 },
}
