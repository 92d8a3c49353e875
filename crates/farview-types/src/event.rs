//! Inbound pointer event types.
//!
//! Platform-agnostic representations of the mouse events delivered by the
//! windowing layer. Coordinates are window-relative pixels.

use crate::command::MouseButton;

/// Where a pointer event originated.
///
/// Some platforms deliver synthetic mouse events for touch input; those are
/// always ignored by the mouse pipeline (touch is handled separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerSource {
    /// A physical pointing device.
    Hardware,
    /// A synthetic event generated from a touch sequence.
    SyntheticTouch,
}

impl PointerSource {
    #[must_use]
    pub fn is_synthetic(self) -> bool {
        matches!(self, Self::SyntheticTouch)
    }
}

/// Button/key state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Mouse button identifier as reported by the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    X1,
    X2,
    /// Buttons beyond the standard five. The value is the raw platform
    /// button index.
    Other(u8),
}

impl PointerButton {
    /// Map to the remote-input protocol button, or `None` for buttons the
    /// protocol has no representation for.
    #[must_use]
    pub fn to_protocol(self) -> Option<MouseButton> {
        match self {
            Self::Left => Some(MouseButton::Primary),
            Self::Middle => Some(MouseButton::Middle),
            Self::Right => Some(MouseButton::Secondary),
            Self::X1 => Some(MouseButton::Aux1),
            Self::X2 => Some(MouseButton::Aux2),
            Self::Other(_) => None,
        }
    }
}

/// A mouse button press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonEvent {
    pub source: PointerSource,
    pub button: PointerButton,
    pub state: ButtonState,
    /// Millisecond timestamp from the windowing layer.
    pub timestamp_ms: u64,
}

/// Pointer motion. Carries both the absolute window-relative position and
/// the raw hardware delta since the previous event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseMotionEvent {
    pub source: PointerSource,
    pub x: i32,
    pub y: i32,
    pub xrel: i32,
    pub yrel: i32,
}

/// Scroll wheel motion. Positive `delta_y` scrolls away from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseWheelEvent {
    pub source: PointerSource,
    pub delta_y: i32,
}
