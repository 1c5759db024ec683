use piano_core::Waveform;

/// Commands bound to non-note keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Record button: start or stop recording.
    ToggleRecording,
    /// Play button.
    Play,
    /// Cancel a running playback.
    StopPlayback,
    /// Oscillator selector.
    SelectWaveform(Waveform),
}

impl AppCommand {
    /// Map key text to a command. Note keys take priority over these, so
    /// the bindings here avoid the default note layout.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "r" | "R" => Some(AppCommand::ToggleRecording),
            "p" | "P" => Some(AppCommand::Play),
            "1" => Some(AppCommand::SelectWaveform(Waveform::Sine)),
            "2" => Some(AppCommand::SelectWaveform(Waveform::Square)),
            "3" => Some(AppCommand::SelectWaveform(Waveform::Sawtooth)),
            "4" => Some(AppCommand::SelectWaveform(Waveform::Triangle)),
            _ => None,
        }
    }
}
