use crate::{
    Clock, CoreResult, Frequency, HighlightTracker, KeyIdentity, KeyPalette, NoteDispatch,
    NoteEvent, PianoError, PlaybackId, Player, ToneSink,
};

use std::{
    panic::Location,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use error_location::ErrorLocation;
use tokio::{runtime::Handle, sync::mpsc, time::Instant};

pub(crate) type TestPiano = crate::Piano<FakeSink, ManualClock, ChannelDispatch>;

/// Clock the test advances by hand.
#[derive(Debug, Clone, Default)]
pub(crate) struct ManualClock(Arc<AtomicU64>);

impl ManualClock {
    pub(crate) fn set(&self, millis: u64) {
        self.0.store(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// Sink that remembers every tone instead of playing it.
#[derive(Debug, Default)]
pub(crate) struct FakeSink {
    pub(crate) emitted: Vec<(Frequency, KeyIdentity)>,
    pub(crate) activations: usize,
    pub(crate) fail_activation: bool,
    active: bool,
}

impl ToneSink for FakeSink {
    fn ensure_active(&mut self) -> CoreResult<()> {
        self.activations += 1;
        if self.fail_activation {
            return Err(PianoError::NoOutputDevice {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.active = true;
        Ok(())
    }

    fn emit(&mut self, frequency: Frequency, key: &KeyIdentity) -> CoreResult<()> {
        if !self.active {
            return Err(PianoError::AudioInactive {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.emitted.push((frequency, key.clone()));
        Ok(())
    }
}

/// What a playback task handed back, stamped with virtual time.
#[derive(Debug, Clone)]
pub(crate) enum Dispatched {
    Note(PlaybackId, NoteEvent, Instant),
    Finished(PlaybackId),
}

#[derive(Debug, Clone)]
pub(crate) struct ChannelDispatch(mpsc::UnboundedSender<Dispatched>);

impl ChannelDispatch {
    pub(crate) fn new() -> (Self, mpsc::UnboundedReceiver<Dispatched>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self(tx), rx)
    }
}

impl NoteDispatch for ChannelDispatch {
    fn dispatch(&self, playback_id: PlaybackId, note: NoteEvent) {
        let _ = self
            .0
            .send(Dispatched::Note(playback_id, note, Instant::now()));
    }

    fn finished(&self, playback_id: PlaybackId) {
        let _ = self.0.send(Dispatched::Finished(playback_id));
    }
}

#[allow(clippy::unwrap_used)]
pub(crate) fn note(hz: f64, key: &str, offset_millis: u64) -> NoteEvent {
    NoteEvent {
        frequency: Frequency::new(hz).unwrap(),
        key: KeyIdentity::new(key),
        offset_millis,
    }
}

/// Piano on the current tokio runtime with fake audio and a manual clock.
pub(crate) fn test_piano() -> (
    TestPiano,
    ManualClock,
    mpsc::UnboundedReceiver<Dispatched>,
) {
    let clock = ManualClock::default();
    let (dispatch, rx) = ChannelDispatch::new();
    let piano = crate::Piano::new(
        FakeSink::default(),
        clock.clone(),
        Player::new(Handle::current(), dispatch),
        KeyPalette::default(),
        HighlightTracker::default(),
    );
    (piano, clock, rx)
}
