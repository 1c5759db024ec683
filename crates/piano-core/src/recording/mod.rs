mod recorder;
mod recorder_state;
mod session;

pub use {recorder::Recorder, recorder_state::RecorderState, session::RecordingSession};
