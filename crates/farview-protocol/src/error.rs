//! Sink errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("remote-input channel closed")]
    Closed,
}
