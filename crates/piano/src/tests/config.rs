use crate::{AppError, config::Config};

use piano_core::{KeyIdentity, Waveform};

use std::fs;

use uuid::Uuid;

/// WHAT: An empty file yields the full default configuration
/// WHY: Every section is optional so old config files keep working
#[test]
#[allow(clippy::unwrap_used)]
fn given_empty_file_when_parsed_then_defaults() {
    // Given/When: Empty TOML
    let config = Config::from_toml_str("").unwrap();

    // Then: Defaults everywhere
    assert_eq!(config, Config::default());
    assert_eq!(config.synth.waveform, Waveform::Sine);
    assert_eq!(config.synth.note_duration_ms, 1_000);
    assert_eq!(config.feedback.highlight_ms, 300);
    assert_eq!(config.keyboard.keys.len(), 12);
}

/// WHAT: Partial sections are merged with defaults
/// WHY: Users should only write the settings they change
#[test]
#[allow(clippy::unwrap_used)]
fn given_partial_sections_when_parsed_then_missing_fields_defaulted() {
    // Given: Only waveform and two key bindings
    let toml = r#"
        [synth]
        waveform = "triangle"

        [keyboard]
        keys = [
            { key = "z", note = 220.0 },
            { key = "x", note = 246.94 },
        ]
    "#;

    // When: Parsed
    let config = Config::from_toml_str(toml).unwrap();

    // Then: Given values used, rest defaulted, keys uppercased in the key map
    assert_eq!(config.synth.waveform, Waveform::Triangle);
    assert!((config.synth.gain - 0.5).abs() < f32::EPSILON);
    let keymap = config.keyboard.keymap();
    assert_eq!(keymap.len(), 2);
    assert_eq!(keymap.get(0).map(|e| e.identity().clone()), Some(KeyIdentity::new("Z")));
    assert_eq!(keymap.lookup('x').and_then(|e| e.frequency()), Some(246.94));
}

/// WHAT: Duplicate and multi-character key bindings are rejected
/// WHY: The physical-key lookup must be unambiguous
#[test]
fn given_invalid_bindings_when_parsed_then_config_error() {
    // Given: A duplicate (case-insensitive) and a multi-character key
    let duplicate = r#"
        [keyboard]
        keys = [{ key = "a", note = 220.0 }, { key = "A", note = 440.0 }]
    "#;
    let long_key = r#"
        [keyboard]
        keys = [{ key = "ab", note = 220.0 }]
    "#;

    // When/Then: Both fail validation
    assert!(matches!(
        Config::from_toml_str(duplicate),
        Err(AppError::ConfigError { .. })
    ));
    assert!(matches!(
        Config::from_toml_str(long_key),
        Err(AppError::ConfigError { .. })
    ));
}

/// WHAT: Non-finite synth gains are rejected
/// WHY: TOML accepts nan and inf, which would break the synth envelope
#[test]
fn given_nan_gain_when_parsed_then_config_error() {
    // Given: NaN gain, then infinite floor gain
    let nan_gain = "[synth]\ngain = nan";
    let inf_floor = "[synth]\nfloor_gain = inf";

    // When/Then: Both fail validation
    assert!(matches!(
        Config::from_toml_str(nan_gain),
        Err(AppError::ConfigError { .. })
    ));
    assert!(matches!(
        Config::from_toml_str(inf_floor),
        Err(AppError::ConfigError { .. })
    ));
}

/// WHAT: A binding with an unplayable note is accepted
/// WHY: Such keys are a silent no-op at trigger time, not a startup failure
#[test]
#[allow(clippy::unwrap_used)]
fn given_zero_note_binding_when_parsed_then_accepted() {
    // Given: A key with a zero frequency
    let toml = r#"
        [keyboard]
        keys = [{ key = "q", note = 0.0 }]
    "#;

    // When: Parsed
    let config = Config::from_toml_str(toml).unwrap();

    // Then: Kept as-is
    assert_eq!(config.keyboard.keys[0].note, 0.0);
}

/// WHAT: Unknown waveforms and malformed TOML are config errors
/// WHY: Parse failures must surface with a reason, not a panic
#[test]
fn given_malformed_toml_when_parsed_then_config_error() {
    // Given/When/Then: Bad waveform and broken syntax
    assert!(matches!(
        Config::from_toml_str("[synth]\nwaveform = \"organ\""),
        Err(AppError::ConfigError { .. })
    ));
    assert!(matches!(
        Config::from_toml_str("[synth"),
        Err(AppError::ConfigError { .. })
    ));
}

/// WHAT: Feedback config builds palette and tracker
/// WHY: Colors and highlight window come from the config file
#[test]
#[allow(clippy::unwrap_used)]
fn given_custom_colors_when_palette_built_then_colors_applied() {
    // Given: A custom color for "a" and a 150ms window
    let toml = r##"
        [feedback]
        highlight_ms = 150
        default_color = "#000000"
        colors = { a = "#123456" }
    "##;

    // When: Building feedback collaborators
    let config = Config::from_toml_str(toml).unwrap();
    let palette = config.feedback.palette();
    let tracker = config.feedback.tracker();

    // Then: Lowercase key normalized, others fall back to default
    assert_eq!(palette.color(&KeyIdentity::new("A")), "#123456");
    assert_eq!(palette.color(&KeyIdentity::new("S")), "#000000");
    assert_eq!(tracker.window_ms(), 150);
}

/// WHAT: Save then load returns the same configuration
/// WHY: The atomic write must produce a readable file and no temp leftovers
#[test]
#[allow(clippy::unwrap_used)]
fn given_config_when_saved_and_loaded_then_identical() {
    // Given: A non-default config and a scratch directory
    let dir = std::env::temp_dir().join(format!("virtual-piano-test-{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    let mut config = Config::default();
    config.synth.waveform = Waveform::Square;
    config.window.width = 1024.0;

    // When: Saved and loaded back
    config.save_to(&path).unwrap();
    let loaded = Config::load_from(&path).unwrap();

    // Then: Identical, temp file renamed away
    assert_eq!(loaded, config);
    assert!(!path.with_extension("toml.tmp").exists());

    fs::remove_dir_all(&dir).unwrap();
}
