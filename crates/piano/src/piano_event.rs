use piano_core::{NoteEvent, PlaybackId};

/// Events sent from the async runtime to the main UI thread.
///
/// The main thread owns the piano (the audio stream is `!Send` on some
/// platforms), so every playback callback flows through this enum.
#[derive(Debug, Clone)]
pub enum PianoEvent {
    /// A scheduled note reached its offset.
    Replay {
        /// Playback the note belongs to.
        playback_id: PlaybackId,
        /// Note to re-trigger.
        note: NoteEvent,
    },
    /// A playback dispatched all of its notes.
    PlaybackFinished {
        /// Playback that completed.
        playback_id: PlaybackId,
    },
}
