//! Piano Core Library
//!
//! Note recording and deterministic replay for a virtual piano, plus the
//! collaborators around it: input routing, an oscillator synthesizer on
//! CPAL, and key highlight timing.
//!
//! # Example
//!
//! ```no_run
//! use piano_core::{
//!     CoreResult, HighlightTracker, InputRouter, KeyPalette, NoteDispatch, NoteEvent, Piano,
//!     PlaybackId, Player, SynthEngine, SynthSettings, SystemClock,
//! };
//!
//! #[derive(Clone)]
//! struct Log;
//!
//! impl NoteDispatch for Log {
//!     fn dispatch(&self, id: PlaybackId, note: NoteEvent) {
//!         println!("{id}: {} at {}ms", note.key, note.offset_millis);
//!     }
//!     fn finished(&self, id: PlaybackId) {
//!         println!("{id}: done");
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> CoreResult<()> {
//!     let player = Player::new(tokio::runtime::Handle::current(), Log);
//!     let mut piano = Piano::new(
//!         SynthEngine::new(SynthSettings::default()),
//!         SystemClock::new(),
//!         player,
//!         KeyPalette::default(),
//!         HighlightTracker::default(),
//!     );
//!     let router = InputRouter::default();
//!
//!     piano.start_recording()?;
//!     if let Some(input) = router.handle_physical_key("a", false) {
//!         piano.press(input);
//!     }
//!     piano.stop_recording()?;
//!     piano.play()?;
//!     Ok(())
//! }
//! ```

mod clock;
mod controls;
mod error;
mod feedback;
mod input;
mod note;
mod piano;
mod playback;
mod recording;
mod synth;
mod tone;

pub use {
    clock::{Clock, SystemClock},
    controls::{ControlState, RecordLabel},
    error::{PianoError, Result as CoreResult},
    feedback::{DEFAULT_COLOR, DEFAULT_HIGHLIGHT_MS, HighlightTracker, IDLE_BACKGROUND, KeyPalette},
    input::{InputRouter, KeyElement, KeyMap, PointerKind, RoutedInput},
    note::{Frequency, KeyIdentity, NoteEvent, NoteRequest},
    piano::{Piano, TriggerOutcome},
    playback::{NoteDispatch, PlaybackId, PlaybackSchedule, Player, ScheduledNote},
    recording::{Recorder, RecorderState, RecordingSession},
    synth::{
        DEFAULT_FLOOR_GAIN, DEFAULT_GAIN, DEFAULT_NOTE_DURATION, SynthEngine, SynthSettings, Waveform,
    },
    tone::{NoteListener, ToneSink},
};

#[cfg(test)]
mod tests;
