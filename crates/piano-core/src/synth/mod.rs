mod engine;
mod settings;
mod voice;
mod waveform;

pub(crate) use voice::Voice;

#[cfg(test)]
pub(crate) use engine::render;

pub use {
    engine::SynthEngine,
    settings::{DEFAULT_FLOOR_GAIN, DEFAULT_GAIN, DEFAULT_NOTE_DURATION, SynthSettings},
    waveform::Waveform,
};
