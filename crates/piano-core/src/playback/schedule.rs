use crate::NoteEvent;

use std::time::Duration;

/// One pending re-trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledNote {
    /// Delay from the start of playback.
    pub offset: Duration,
    /// Note to re-trigger.
    pub note: NoteEvent,
}

/// Explicit list of delayed re-triggers built from a finalized recording.
///
/// Entries keep capture order. Offsets are therefore non-decreasing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackSchedule {
    entries: Vec<ScheduledNote>,
}

impl PlaybackSchedule {
    /// Schedule every note at its recorded offset.
    pub fn from_events(events: &[NoteEvent]) -> Self {
        let entries = events
            .iter()
            .map(|note| ScheduledNote {
                offset: Duration::from_millis(note.offset_millis),
                note: note.clone(),
            })
            .collect();

        Self { entries }
    }

    /// Pending entries in firing order.
    pub fn entries(&self) -> &[ScheduledNote] {
        &self.entries
    }

    /// Number of scheduled notes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Offset of the last entry.
    pub fn total_duration(&self) -> Duration {
        self.entries.last().map_or(Duration::ZERO, |e| e.offset)
    }

    pub(crate) fn into_entries(self) -> Vec<ScheduledNote> {
        self.entries
    }
}
