use crate::{CoreResult, Frequency, KeyIdentity};

/// Sound-producing collaborator.
///
/// Implementations own the audio engine and its lifecycle. The recording
/// core only asks for a tone; waveform, gain curve and graph wiring are the
/// sink's business.
pub trait ToneSink {
    /// Lazily create or resume the underlying audio engine.
    ///
    /// Called before every trigger. Must be cheap once active and must
    /// never re-create an engine that already exists.
    fn ensure_active(&mut self) -> CoreResult<()>;

    /// Produce a short decaying tone for `key`.
    fn emit(&mut self, frequency: Frequency, key: &KeyIdentity) -> CoreResult<()>;
}

/// Single notification hook for "a note fired".
pub trait NoteListener {
    /// Invoked synchronously for every emitted note, whatever the state.
    fn on_note_fired(&mut self, frequency: Frequency, key: &KeyIdentity);
}
