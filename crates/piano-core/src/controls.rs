use std::fmt;

/// Label shown on the record toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLabel {
    /// Idle: pressing starts a recording.
    Record,
    /// Recording: pressing stops it.
    Stop,
}

impl fmt::Display for RecordLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordLabel::Record => f.write_str("Record"),
            RecordLabel::Stop => f.write_str("Stop"),
        }
    }
}

/// Snapshot of the record/play control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    /// Record toggle label.
    pub record_label: RecordLabel,
    /// Play is enabled only when idle with a non-empty recording.
    pub play_enabled: bool,
    /// A playback still has notes pending.
    pub playing: bool,
}

impl ControlState {
    pub(crate) fn derive(recording: bool, has_recording: bool, playing: bool) -> Self {
        Self {
            record_label: if recording {
                RecordLabel::Stop
            } else {
                RecordLabel::Record
            },
            play_enabled: !recording && has_recording,
            playing,
        }
    }
}
