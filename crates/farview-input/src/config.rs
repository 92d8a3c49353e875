//! Mouse subsystem configuration loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Mouse input settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MouseConfig {
    /// Dispatch timer period in milliseconds. Chosen to match the remote
    /// display's expected input poll rate.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Forward motion as absolute positions within the video region instead
    /// of raw hardware deltas.
    #[serde(default)]
    pub absolute_mode: bool,

    /// Remote video stream width in pixels.
    #[serde(default = "default_stream_width")]
    pub stream_width: i32,

    /// Remote video stream height in pixels.
    #[serde(default = "default_stream_height")]
    pub stream_height: i32,
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            absolute_mode: false,
            stream_width: default_stream_width(),
            stream_height: default_stream_height(),
        }
    }
}

impl MouseConfig {
    /// Load the configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

fn default_poll_interval_ms() -> u64 {
    8 // 125 Hz
}

fn default_stream_width() -> i32 {
    1920
}

fn default_stream_height() -> i32 {
    1080
}
