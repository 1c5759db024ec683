use crate::{
    Clock, CoreResult, Frequency, KeyIdentity, NoteEvent, NoteListener, PianoError,
    recording::{RecorderState, RecordingSession},
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, trace};
use uuid::Uuid;

/// Owns the single [`RecordingSession`] and its Idle/Recording lifecycle.
///
/// Notes arrive through [`NoteListener::on_note_fired`], which must be
/// invoked synchronously with note emission so that offsets reflect input
/// timing rather than processing delay.
pub struct Recorder<C> {
    clock: C,
    state: RecorderState,
    session: RecordingSession,
}

impl<C: Clock> Recorder<C> {
    /// Create an idle recorder with an empty session.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            state: RecorderState::Idle,
            session: RecordingSession::empty(),
        }
    }

    /// Start a new recording, discarding any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`PianoError::AlreadyRecording`] if called while recording.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn start_recording(&mut self) -> CoreResult<Uuid> {
        if self.state.is_recording() {
            return Err(PianoError::AlreadyRecording {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let started_at_ms = self.clock.now_millis();
        let discarded = self.session.events().len();
        self.session = RecordingSession::begin(started_at_ms);
        let session_id = self.session.id();

        self.state = RecorderState::Recording {
            started_at_ms,
            session_id,
        };

        info!(session_id = %session_id, discarded, "Recording started");

        Ok(session_id)
    }

    /// Stop the current recording and freeze its notes.
    ///
    /// Returns the number of captured notes.
    ///
    /// # Errors
    ///
    /// Returns [`PianoError::NotRecording`] if called while idle.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn stop_recording(&mut self) -> CoreResult<usize> {
        let RecorderState::Recording {
            started_at_ms,
            session_id,
        } = self.state
        else {
            return Err(PianoError::NotRecording {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        self.session.finish();
        self.state = RecorderState::Idle;

        let note_count = self.session.events().len();
        info!(
            session_id = %session_id,
            duration_ms = self.clock.now_millis().saturating_sub(started_at_ms),
            note_count,
            "Recording stopped"
        );

        Ok(note_count)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RecorderState {
        self.state
    }

    /// True while capturing notes.
    pub fn is_recording(&self) -> bool {
        self.state.is_recording()
    }

    /// True when a finalized, non-empty recording is available for playback.
    pub fn has_recording(&self) -> bool {
        !self.is_recording() && self.session.is_playable()
    }

    /// Read-only view of the current session.
    pub fn session(&self) -> &RecordingSession {
        &self.session
    }

    /// Captured notes in capture order.
    pub fn events(&self) -> &[NoteEvent] {
        self.session.events()
    }

    /// The clock driving offsets.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: Clock> NoteListener for Recorder<C> {
    fn on_note_fired(&mut self, frequency: Frequency, key: &KeyIdentity) {
        let now_ms = self.clock.now_millis();

        if self.session.capture(frequency, key.clone(), now_ms) {
            debug!(
                session_id = %self.session.id(),
                %frequency,
                %key,
                offset_ms = now_ms.saturating_sub(self.session.started_at_ms()),
                "Note captured"
            );
        } else {
            trace!(%frequency, %key, "Note fired while idle, not captured");
        }
    }
}
