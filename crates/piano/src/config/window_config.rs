use crate::config::{default_window_height, default_window_width};

use serde::{Deserialize, Serialize};

/// Window geometry in logical pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Initial width.
    #[serde(default = "default_window_width")]
    pub width: f64,
    /// Initial height.
    #[serde(default = "default_window_height")]
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}
