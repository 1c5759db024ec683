use error_location::ErrorLocation;
use thiserror::Error;

/// Piano core errors with source location tracking.
#[derive(Error, Debug)]
pub enum PianoError {
    /// `start_recording` was called while a recording is in progress.
    #[error("Recording already in progress {location}")]
    AlreadyRecording {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// `stop_recording` was called while idle.
    #[error("No recording in progress {location}")]
    NotRecording {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// `play` was called without a finalized, non-empty recording.
    #[error("Nothing recorded to play {location}")]
    NothingToPlay {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// `play` was called while a recording is in progress.
    #[error("Cannot play while recording {location}")]
    PlaybackWhileRecording {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// No audio output device found.
    #[error("No output device found {location}")]
    NoOutputDevice {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A note was emitted before the audio engine was activated.
    #[error("Audio engine is not active {location}")]
    AudioInactive {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Audio device operation failed.
    #[error("Audio device error: {reason} {location}")]
    DeviceError {
        /// Description of the device error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl PianoError {
    /// True for errors caused by calling a recorder/player transition out of order.
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            PianoError::AlreadyRecording { .. }
                | PianoError::NotRecording { .. }
                | PianoError::NothingToPlay { .. }
                | PianoError::PlaybackWhileRecording { .. }
        )
    }
}

/// Result type alias using [`PianoError`].
pub type Result<T> = std::result::Result<T, PianoError>;
