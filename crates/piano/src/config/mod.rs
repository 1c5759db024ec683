mod feedback_config;
mod keyboard_config;
mod synth_config;
mod window_config;
#[allow(clippy::module_inception)]
mod config;

pub(crate) use {
    config::Config, feedback_config::FeedbackConfig, keyboard_config::KeyBinding,
    keyboard_config::KeyboardConfig, synth_config::SynthConfig, window_config::WindowConfig,
};

use piano_core::{
    DEFAULT_COLOR, DEFAULT_FLOOR_GAIN, DEFAULT_GAIN, DEFAULT_HIGHLIGHT_MS, DEFAULT_NOTE_DURATION,
    IDLE_BACKGROUND, KeyPalette,
};

use std::collections::BTreeMap;

pub(crate) const DEFAULT_WINDOW_WIDTH: f64 = 840.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f64 = 240.0;

pub(crate) fn default_gain() -> f32 {
    DEFAULT_GAIN
}

pub(crate) fn default_floor_gain() -> f32 {
    DEFAULT_FLOOR_GAIN
}

pub(crate) fn default_note_duration_ms() -> u64 {
    u64::try_from(DEFAULT_NOTE_DURATION.as_millis()).unwrap_or(1_000)
}

pub(crate) fn default_highlight_ms() -> u64 {
    DEFAULT_HIGHLIGHT_MS
}

pub(crate) fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

pub(crate) fn default_idle_background() -> String {
    IDLE_BACKGROUND.to_string()
}

pub(crate) fn default_colors() -> BTreeMap<String, String> {
    KeyPalette::default_colors()
        .map(|(key, color)| (key.as_str().to_string(), color))
        .collect()
}

pub(crate) fn default_window_width() -> f64 {
    DEFAULT_WINDOW_WIDTH
}

pub(crate) fn default_window_height() -> f64 {
    DEFAULT_WINDOW_HEIGHT
}
