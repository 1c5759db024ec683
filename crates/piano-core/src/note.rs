use std::fmt;

/// A playable tone frequency in Hz.
///
/// Only positive, finite values can be constructed. Zero, negative, NaN and
/// infinite inputs are rejected so that a malformed key binding can never
/// reach the synthesizer or the recorder.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Frequency(f64);

impl Frequency {
    /// Validate a raw frequency.
    pub fn new(hz: f64) -> Option<Self> {
        (hz.is_finite() && hz > 0.0).then_some(Self(hz))
    }

    /// Validate an optional raw frequency (missing counts as invalid).
    pub fn from_raw(hz: Option<f64>) -> Option<Self> {
        hz.and_then(Self::new)
    }

    /// The frequency in Hz.
    pub fn hz(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}Hz", self.0)
    }
}

/// Opaque key token used only to drive visual feedback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyIdentity(String);

impl KeyIdentity {
    /// Wrap a key token.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeyIdentity {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// One captured keypress.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteEvent {
    /// Tone to reproduce.
    pub frequency: Frequency,
    /// Key to highlight on replay.
    pub key: KeyIdentity,
    /// Milliseconds since the recording started.
    pub offset_millis: u64,
}

/// A not-yet-validated request to sound a note.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteRequest {
    /// Raw frequency as read from the key's data; `None` when missing.
    pub frequency: Option<f64>,
    /// Key that produced the request.
    pub key: KeyIdentity,
}

impl NoteRequest {
    /// Build a request from raw key data.
    pub fn new(frequency: Option<f64>, key: KeyIdentity) -> Self {
        Self { frequency, key }
    }
}

impl From<&NoteEvent> for NoteRequest {
    fn from(note: &NoteEvent) -> Self {
        Self {
            frequency: Some(note.frequency.hz()),
            key: note.key.clone(),
        }
    }
}
