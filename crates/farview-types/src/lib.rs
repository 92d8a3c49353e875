//! Shared types for farview.
//!
//! This crate contains the types shared across the farview workspace:
//! inbound pointer events from the windowing layer, outbound remote-input
//! commands, and the rectangle geometry used to map window coordinates
//! into the video region.

pub mod command;
pub mod event;
pub mod geometry;

pub use command::{ButtonAction, InputCommand, MouseButton};
pub use event::{
    ButtonState, MouseButtonEvent, MouseMotionEvent, MouseWheelEvent, PointerButton,
    PointerSource,
};
pub use geometry::Rect;
