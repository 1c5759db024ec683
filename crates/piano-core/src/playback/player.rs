use crate::playback::{NoteDispatch, PlaybackSchedule};

use tokio::{
    runtime::Handle,
    sync::watch,
    task::JoinHandle,
    time::{Instant, sleep_until},
};
use tracing::{debug, info, instrument, trace};
use uuid::Uuid;

/// Identifies one `play()` invocation.
pub type PlaybackId = Uuid;

struct ActivePlayback {
    id: PlaybackId,
    cancel_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

/// Replays schedules on a tokio runtime.
///
/// # Overlap
///
/// At most one playback is live. Starting a new one cancels the previous
/// playback before scheduling anything, so two playbacks never interleave.
///
/// # Ordering
///
/// A single task walks the schedule in capture order and sleeps until each
/// entry's deadline. Timer resolution may fire two close entries in the same
/// tick, but never out of order.
pub struct Player<D> {
    runtime: Handle,
    dispatcher: D,
    active: Option<ActivePlayback>,
}

impl<D: NoteDispatch> Player<D> {
    /// Create a player that spawns playback tasks on `runtime`.
    pub fn new(runtime: Handle, dispatcher: D) -> Self {
        Self {
            runtime,
            dispatcher,
            active: None,
        }
    }

    /// Start replaying `schedule`, measuring offsets from this call.
    ///
    /// Returns immediately after scheduling. Any playback still in flight is
    /// cancelled first.
    #[instrument(skip(self, schedule), fields(note_count = schedule.len()))]
    pub fn play(&mut self, schedule: PlaybackSchedule) -> PlaybackId {
        if self.stop() {
            debug!("Previous playback cancelled by restart");
        }

        let start = Instant::now();
        let id = Uuid::new_v4();
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let total_ms = schedule.total_duration().as_millis();
        let note_count = schedule.len();

        let handle = self.runtime.spawn(run_playback(
            id,
            start,
            schedule,
            self.dispatcher.clone(),
            cancel_rx,
        ));

        self.active = Some(ActivePlayback {
            id,
            cancel_tx,
            handle,
        });

        info!(playback_id = %id, note_count, total_ms, "Playback scheduled");

        id
    }

    /// Cancel the in-flight playback, if any.
    ///
    /// Returns true if a playback was still running.
    #[instrument(skip(self))]
    pub fn stop(&mut self) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };

        let was_running = !active.handle.is_finished();
        // Receiver may already be gone if the task completed.
        let _ = active.cancel_tx.send(true);

        if was_running {
            info!(playback_id = %active.id, "Playback cancelled");
        }

        was_running
    }

    /// True while the current playback still has notes to fire.
    pub fn is_playing(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| !active.handle.is_finished())
    }

    /// True if `id` is the live playback.
    pub fn is_current(&self, id: PlaybackId) -> bool {
        self.active.as_ref().is_some_and(|active| active.id == id)
    }

    /// Forget `id` once its completion has been observed.
    pub fn finish(&mut self, id: PlaybackId) -> bool {
        if self.is_current(id) {
            self.active = None;
            debug!(playback_id = %id, "Playback finished");
            true
        } else {
            false
        }
    }
}

async fn run_playback<D: NoteDispatch>(
    id: PlaybackId,
    start: Instant,
    schedule: PlaybackSchedule,
    dispatcher: D,
    mut cancel_rx: watch::Receiver<bool>,
) {
    for entry in schedule.into_entries() {
        tokio::select! {
            biased;
            // A dropped sender also ends the playback.
            _ = cancel_rx.changed() => {
                trace!(playback_id = %id, "Playback task observed cancellation");
                return;
            }
            () = sleep_until(start + entry.offset) => {}
        }

        trace!(
            playback_id = %id,
            offset_ms = entry.offset.as_millis(),
            key = %entry.note.key,
            "Dispatching scheduled note"
        );
        dispatcher.dispatch(id, entry.note);
    }

    dispatcher.finished(id);
}
