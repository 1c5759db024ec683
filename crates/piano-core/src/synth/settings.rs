use crate::Waveform;

use std::time::Duration;

/// Default peak gain of a new note.
pub const DEFAULT_GAIN: f32 = 0.5;
/// Gain a note decays to before it is cut.
pub const DEFAULT_FLOOR_GAIN: f32 = 0.01;
/// How long a note sounds.
pub const DEFAULT_NOTE_DURATION: Duration = Duration::from_millis(1000);
/// Simultaneous voices before the oldest is dropped.
pub const DEFAULT_MAX_VOICES: usize = 32;

/// Tone shape owned by the synthesizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthSettings {
    /// Oscillator shape for new notes.
    pub waveform: Waveform,
    /// Starting gain (0.0 to 1.0).
    pub gain: f32,
    /// Gain at the end of the exponential decay.
    pub floor_gain: f32,
    /// Length of each note.
    pub note_duration: Duration,
    /// Voice cap.
    pub max_voices: usize,
}

impl SynthSettings {
    /// Settings with gains clamped into a usable range.
    ///
    /// Non-finite gains fall back to the defaults.
    pub fn new(waveform: Waveform, gain: f32, floor_gain: f32, note_duration: Duration) -> Self {
        let gain = finite_or(gain, DEFAULT_GAIN).clamp(0.001, 1.0);
        let floor_gain = finite_or(floor_gain, DEFAULT_FLOOR_GAIN).clamp(0.0001, gain);
        Self {
            waveform,
            gain,
            floor_gain,
            note_duration,
            max_voices: DEFAULT_MAX_VOICES,
        }
    }
}

impl Default for SynthSettings {
    fn default() -> Self {
        Self {
            waveform: Waveform::default(),
            gain: DEFAULT_GAIN,
            floor_gain: DEFAULT_FLOOR_GAIN,
            note_duration: DEFAULT_NOTE_DURATION,
            max_voices: DEFAULT_MAX_VOICES,
        }
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}
