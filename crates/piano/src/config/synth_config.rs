use crate::config::{default_floor_gain, default_gain, default_note_duration_ms};

use piano_core::{SynthSettings, Waveform};

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Synthesizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthConfig {
    /// Oscillator shape at startup.
    #[serde(default)]
    pub waveform: Waveform,
    /// Peak gain of each note.
    #[serde(default = "default_gain")]
    pub gain: f32,
    /// Gain each note decays to before it stops.
    #[serde(default = "default_floor_gain")]
    pub floor_gain: f32,
    /// Note length in milliseconds.
    #[serde(default = "default_note_duration_ms")]
    pub note_duration_ms: u64,
}

impl SynthConfig {
    /// Engine settings for this configuration.
    pub fn settings(&self) -> SynthSettings {
        SynthSettings::new(
            self.waveform,
            self.gain,
            self.floor_gain,
            Duration::from_millis(self.note_duration_ms),
        )
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            waveform: Waveform::default(),
            gain: default_gain(),
            floor_gain: default_floor_gain(),
            note_duration_ms: default_note_duration_ms(),
        }
    }
}
