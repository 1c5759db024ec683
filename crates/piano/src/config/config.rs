//! Configuration management for the piano.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths, validation, and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{FeedbackConfig, KeyboardConfig, SynthConfig, WindowConfig},
};

use std::{
    collections::HashSet,
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Synthesizer settings.
    #[serde(default)]
    pub synth: SynthConfig,
    /// Key layout.
    #[serde(default)]
    pub keyboard: KeyboardConfig,
    /// Highlight colors and timing.
    #[serde(default)]
    pub feedback: FeedbackConfig,
    /// Window geometry.
    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    /// Load configuration from disk, creating default if not found.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let config = Self::load_from(&config_path)?;
            info!(config_path = ?config_path, "Configuration loaded");
            Ok(config)
        } else {
            info!("No config found, creating default");
            Self::create_default(&config_path)
        }
    }

    /// Read and validate a configuration file.
    #[track_caller]
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Self::from_toml_str(&contents)
    }

    /// Parse and validate TOML text.
    #[track_caller]
    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        let config: Config = toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Check synth gains and key bindings.
    ///
    /// Gains must be finite. Every key must be exactly one character and
    /// appear once. A binding with an unplayable note is only warned about:
    /// pressing it is a no-op.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn validate(&self) -> AppResult<()> {
        for (name, value) in [
            ("gain", self.synth.gain),
            ("floor_gain", self.synth.floor_gain),
        ] {
            if !value.is_finite() {
                return Err(AppError::ConfigError {
                    reason: format!("synth.{} must be a finite number, got {}", name, value),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        let mut seen = HashSet::new();

        for binding in &self.keyboard.keys {
            if binding.key.chars().count() != 1 {
                return Err(AppError::ConfigError {
                    reason: format!(
                        "Key binding {:?} must be exactly one character",
                        binding.key
                    ),
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            if !seen.insert(binding.key.to_uppercase()) {
                return Err(AppError::ConfigError {
                    reason: format!("Key {:?} is bound more than once", binding.key),
                    location: ErrorLocation::from(Location::caller()),
                });
            }

            if !(binding.note.is_finite() && binding.note > 0.0) {
                warn!(
                    key = %binding.key,
                    note = binding.note,
                    "Key has no playable note and will be silent"
                );
            }
        }

        Ok(())
    }

    /// Save configuration to disk using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // Atomic write: write to temp file then rename
        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("com", "virtual-piano", "Virtual-Piano").ok_or_else(|| {
                AppError::ConfigError {
                    reason: "Failed to get config directory".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }

    #[track_caller]
    fn create_default(config_path: &Path) -> AppResult<Self> {
        let config = Config::default();

        // Startup continues on in-memory defaults when the file cannot be written.
        if let Err(e) = config.save_to(config_path) {
            warn!(error = ?e, "Could not write default config, using defaults in memory");
        }

        Ok(config)
    }
}
