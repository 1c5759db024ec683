use crate::{NoteEvent, PlaybackId};

/// Receives scheduled notes from a running playback.
///
/// Called from the playback task, not from the thread that owns the
/// recorder, so implementations usually forward into a channel or event
/// loop. Every call is tagged with the playback it belongs to so the owner
/// can drop notes from a playback it already cancelled.
pub trait NoteDispatch: Clone + Send + 'static {
    /// A note has reached its scheduled offset.
    fn dispatch(&self, playback_id: PlaybackId, note: NoteEvent);

    /// Every note of the playback has been dispatched.
    fn finished(&self, playback_id: PlaybackId);
}
