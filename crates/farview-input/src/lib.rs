//! Mouse-input translation and batching for farview.
//!
//! Converts local pointer events into a rate-limited stream of remote-input
//! commands. The OS event thread feeds [`MouseHandler`]; batched state is
//! drained by the dispatch timer ([`dispatch`]) at a fixed polling interval
//! and emitted through a [`farview_protocol::InputSink`].
//!
//! Two motion modes exist: relative (raw hardware deltas, summed per tick)
//! and absolute (last known position, mapped into the video region).

pub mod accumulator;
pub mod capture;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod handler;
pub mod mock;
pub mod report;

pub use accumulator::DeltaAccumulator;
pub use capture::CaptureState;
pub use config::MouseConfig;
pub use dispatch::DispatchHandle;
pub use error::InputError;
pub use handler::{MouseHandler, PointerState};
pub use report::{PositionReport, PositionSnapshot};

/// Window geometry queries the input subsystem depends on.
///
/// Implemented by the windowing layer; tests use [`mock::MockWindow`].
pub trait WindowHandle: Send + Sync {
    /// Current window size in pixels.
    fn size(&self) -> (i32, i32);
}
