use crate::{Frequency, KeyIdentity, NoteEvent};

use uuid::Uuid;

/// The live capture buffer plus its start time and active flag.
///
/// Only [`Recorder`](crate::Recorder) mutates a session. Everyone else sees
/// it through shared references.
#[derive(Debug, Clone)]
pub struct RecordingSession {
    id: Uuid,
    is_recording: bool,
    started_at_ms: u64,
    events: Vec<NoteEvent>,
}

impl RecordingSession {
    pub(crate) fn empty() -> Self {
        Self {
            id: Uuid::nil(),
            is_recording: false,
            started_at_ms: 0,
            events: Vec::new(),
        }
    }

    /// Discard the previous capture and start a new one.
    pub(crate) fn begin(started_at_ms: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            is_recording: true,
            started_at_ms,
            events: Vec::new(),
        }
    }

    /// Append a note fired at `now_ms`. Ignored unless recording.
    pub(crate) fn capture(&mut self, frequency: Frequency, key: KeyIdentity, now_ms: u64) -> bool {
        if !self.is_recording {
            return false;
        }

        // Offsets never decrease in capture order.
        let offset = now_ms.saturating_sub(self.started_at_ms);
        let floor = self.events.last().map_or(0, |e| e.offset_millis);

        self.events.push(NoteEvent {
            frequency,
            key,
            offset_millis: offset.max(floor),
        });
        true
    }

    /// Freeze the capture.
    pub(crate) fn finish(&mut self) {
        self.is_recording = false;
    }

    /// Session ID for log correlation. Nil before the first recording.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// True while the session is accepting notes.
    pub fn is_recording(&self) -> bool {
        self.is_recording
    }

    /// Clock reading when the session started.
    pub fn started_at_ms(&self) -> u64 {
        self.started_at_ms
    }

    /// Captured notes in capture order.
    pub fn events(&self) -> &[NoteEvent] {
        &self.events
    }

    /// True once the session is frozen and holds at least one note.
    pub fn is_playable(&self) -> bool {
        !self.is_recording && !self.events.is_empty()
    }

    /// Offset of the last captured note.
    pub fn duration_ms(&self) -> u64 {
        self.events.last().map_or(0, |e| e.offset_millis)
    }
}
