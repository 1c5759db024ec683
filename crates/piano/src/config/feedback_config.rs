use crate::config::{default_color, default_colors, default_highlight_ms, default_idle_background};

use piano_core::{HighlightTracker, KeyIdentity, KeyPalette};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key highlight configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// How long a key stays lit after it fires.
    #[serde(default = "default_highlight_ms")]
    pub highlight_ms: u64,
    /// Color for keys missing from `colors`.
    #[serde(default = "default_color")]
    pub default_color: String,
    /// Background when nothing is lit.
    #[serde(default = "default_idle_background")]
    pub idle_background: String,
    /// Per-key highlight colors.
    #[serde(default = "default_colors")]
    pub colors: BTreeMap<String, String>,
}

impl FeedbackConfig {
    /// Color palette for these settings.
    pub fn palette(&self) -> KeyPalette {
        KeyPalette::new(
            self.colors
                .iter()
                .map(|(key, color)| (KeyIdentity::new(key.to_uppercase()), color.clone())),
            self.default_color.clone(),
            self.idle_background.clone(),
        )
    }

    /// Highlight tracker with the configured window.
    pub fn tracker(&self) -> HighlightTracker {
        HighlightTracker::new(self.highlight_ms)
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            highlight_ms: default_highlight_ms(),
            default_color: default_color(),
            idle_background: default_idle_background(),
            colors: default_colors(),
        }
    }
}
