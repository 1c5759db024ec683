use crate::PianoEvent;

use piano_core::{NoteDispatch, NoteEvent, PlaybackId};

use tao::event_loop::EventLoopProxy;
use tracing::debug;

/// Forwards playback notes to the main thread's event loop.
#[derive(Clone)]
pub struct ProxyDispatch {
    proxy: EventLoopProxy<PianoEvent>,
}

impl ProxyDispatch {
    /// Wrap an event loop proxy.
    pub fn new(proxy: EventLoopProxy<PianoEvent>) -> Self {
        Self { proxy }
    }
}

impl NoteDispatch for ProxyDispatch {
    fn dispatch(&self, playback_id: PlaybackId, note: NoteEvent) {
        delivered(
            self.proxy
                .send_event(PianoEvent::Replay { playback_id, note }),
            playback_id,
            "note",
        );
    }

    fn finished(&self, playback_id: PlaybackId) {
        delivered(
            self.proxy
                .send_event(PianoEvent::PlaybackFinished { playback_id }),
            playback_id,
            "completion",
        );
    }
}

/// Log a send that failed because the event loop has exited.
pub(crate) fn delivered<E>(result: Result<(), E>, playback_id: PlaybackId, what: &str) -> bool {
    if result.is_err() {
        debug!(playback_id = %playback_id, what, "Event loop closed, playback event dropped");
        return false;
    }
    true
}
