use uuid::Uuid;

/// Recorder state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderState {
    /// Not currently recording.
    Idle,
    /// Capturing notes.
    Recording {
        /// Clock reading when recording started.
        started_at_ms: u64,
        /// Unique session ID for log correlation.
        session_id: Uuid,
    },
}

impl RecorderState {
    /// True while capturing notes.
    pub fn is_recording(&self) -> bool {
        matches!(self, RecorderState::Recording { .. })
    }
}
