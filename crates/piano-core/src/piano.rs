use crate::{
    Clock, ControlState, CoreResult, Frequency, HighlightTracker, KeyIdentity, KeyPalette,
    NoteDispatch, NoteEvent, NoteListener, NoteRequest, PianoError, PlaybackId,
    PlaybackSchedule, Player, Recorder, RecorderState, RoutedInput, ToneSink,
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, trace, warn};

/// Result of a trigger attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A tone was requested, the key lit and the recorder notified.
    Emitted,
    /// Invalid frequency or stale playback: nothing happened.
    Ignored,
}

/// Wires routed input, the tone sink, the recorder and the player together.
///
/// `Piano` is the single owner of the recording session. It runs on one
/// thread; playback notes come back to it through [`Piano::replay`].
pub struct Piano<S, C, D> {
    sink: S,
    recorder: Recorder<C>,
    player: Player<D>,
    highlights: HighlightTracker,
    palette: KeyPalette,
}

impl<S: ToneSink, C: Clock, D: NoteDispatch> Piano<S, C, D> {
    /// Assemble a piano from its collaborators.
    pub fn new(
        sink: S,
        clock: C,
        player: Player<D>,
        palette: KeyPalette,
        highlights: HighlightTracker,
    ) -> Self {
        Self {
            sink,
            recorder: Recorder::new(clock),
            player,
            highlights,
            palette,
        }
    }

    /// Handle a routed press: wake the audio engine, then trigger.
    pub fn press(&mut self, input: RoutedInput) -> TriggerOutcome {
        self.activate_audio();
        self.trigger(input.request)
    }

    /// Sound a note and notify the recorder.
    ///
    /// Zero, negative, NaN or missing frequencies are a silent no-op: no
    /// tone, no highlight, no recorded event. Audio failures are logged and
    /// do not stop the note from being highlighted and recorded.
    pub fn trigger(&mut self, request: NoteRequest) -> TriggerOutcome {
        let Some(frequency) = Frequency::from_raw(request.frequency) else {
            debug!(key = %request.key, raw = ?request.frequency, "Invalid frequency, ignoring");
            return TriggerOutcome::Ignored;
        };

        if let Err(e) = self.sink.emit(frequency, &request.key) {
            warn!(error = ?e, key = %request.key, "Tone not emitted");
        }

        let now_ms = self.recorder.clock().now_millis();
        self.highlights.apply(&request.key, now_ms);
        self.recorder.on_note_fired(frequency, &request.key);

        TriggerOutcome::Emitted
    }

    /// Start a recording. Cancels an in-flight playback first so replayed
    /// notes never end up in the new capture.
    ///
    /// # Errors
    ///
    /// Returns [`PianoError::AlreadyRecording`] if already recording.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn start_recording(&mut self) -> CoreResult<()> {
        self.activate_audio();

        if self.recorder.is_recording() {
            return Err(PianoError::AlreadyRecording {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.player.stop() {
            info!("Playback cancelled to start recording");
        }

        self.recorder.start_recording()?;
        Ok(())
    }

    /// Stop the recording. In-flight playback is left alone.
    ///
    /// # Errors
    ///
    /// Returns [`PianoError::NotRecording`] if idle.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn stop_recording(&mut self) -> CoreResult<usize> {
        self.activate_audio();
        self.recorder.stop_recording()
    }

    /// Record button: start when idle, stop when recording.
    #[track_caller]
    pub fn toggle_recording(&mut self) -> CoreResult<RecorderState> {
        if self.recorder.is_recording() {
            self.stop_recording()?;
        } else {
            self.start_recording()?;
        }
        Ok(self.recorder.state())
    }

    /// Replay the finalized recording from now.
    ///
    /// Cancels a playback that is still running (cancel-and-restart).
    ///
    /// # Errors
    ///
    /// Returns [`PianoError::PlaybackWhileRecording`] while recording and
    /// [`PianoError::NothingToPlay`] when the recording is empty.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn play(&mut self) -> CoreResult<PlaybackId> {
        self.activate_audio();

        if self.recorder.is_recording() {
            return Err(PianoError::PlaybackWhileRecording {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !self.recorder.has_recording() {
            return Err(PianoError::NothingToPlay {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let schedule = PlaybackSchedule::from_events(self.recorder.events());
        Ok(self.player.play(schedule))
    }

    /// Cancel the running playback. Returns true if one was running.
    pub fn stop_playback(&mut self) -> bool {
        self.player.stop()
    }

    /// Re-trigger a note delivered by the player.
    ///
    /// Notes from a cancelled or replaced playback are dropped.
    pub fn replay(&mut self, playback_id: PlaybackId, note: &NoteEvent) -> TriggerOutcome {
        if !self.player.is_current(playback_id) {
            trace!(playback_id = %playback_id, key = %note.key, "Stale playback note dropped");
            return TriggerOutcome::Ignored;
        }
        self.trigger(NoteRequest::from(note))
    }

    /// Record that the player dispatched every note of `playback_id`.
    pub fn playback_finished(&mut self, playback_id: PlaybackId) {
        self.player.finish(playback_id);
    }

    /// Clear elapsed highlights. Returns true if anything changed.
    pub fn tick(&mut self) -> bool {
        let now_ms = self.recorder.clock().now_millis();
        !self.highlights.expire(now_ms).is_empty()
    }

    /// Current control surface.
    pub fn controls(&self) -> ControlState {
        ControlState::derive(
            self.recorder.is_recording(),
            self.recorder.has_recording(),
            self.player.is_playing(),
        )
    }

    /// Background color for the current highlight state.
    pub fn background(&self) -> String {
        match self.highlights.latest() {
            Some(key) => self.palette.background_for(key),
            None => self.palette.idle_background().to_string(),
        }
    }

    /// Keys lit right now with their colors, oldest first.
    pub fn lit_keys(&self) -> Vec<(KeyIdentity, String)> {
        self.highlights
            .active_keys()
            .map(|key| (key.clone(), self.palette.color(key).to_string()))
            .collect()
    }

    /// Read-only recorder view.
    pub fn recorder(&self) -> &Recorder<C> {
        &self.recorder
    }

    /// Highlight state.
    pub fn highlights(&self) -> &HighlightTracker {
        &self.highlights
    }

    /// The tone sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable tone sink, e.g. to change the waveform.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn activate_audio(&mut self) {
        // Failure only silences audio; recording still works.
        if let Err(e) = self.sink.ensure_active() {
            warn!(error = ?e, "Audio engine unavailable");
        }
    }
}
