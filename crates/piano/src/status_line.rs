use piano_core::{ControlState, KeyIdentity, RecordLabel, Waveform};

/// Window title describing what the piano is doing.
pub fn status_title(
    controls: &ControlState,
    waveform: Waveform,
    lit: &[(KeyIdentity, String)],
) -> String {
    let activity = if controls.record_label == RecordLabel::Stop {
        "Recording (R to stop)"
    } else if controls.playing {
        "Playing (Esc to stop)"
    } else if controls.play_enabled {
        "Ready (P to play, R to record)"
    } else {
        "Idle (R to record)"
    };

    let mut title = format!("Virtual Piano | {} | {}", activity, waveform);

    for (key, color) in lit {
        title.push_str(&format!(" | {} {}", key, color));
    }

    title
}
