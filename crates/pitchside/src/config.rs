//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use pitchside_wordsearch::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_WORD_LEN, DEFAULT_WORD_COUNT, Generator, PALETTE,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "PITCHSIDE_CONFIG";

/// Config file used when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "pitchside.toml";

/// Settings for the catalog and the word-search game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct PitchsideConfig {
    /// Directory containing the catalog JSON files.
    data_dir: PathBuf,

    /// Width and height of word-search grids.
    grid_size: usize,

    /// Words hidden per puzzle.
    word_count: usize,

    /// Longest club name (after normalization) allowed into a puzzle.
    max_word_len: usize,

    /// Placement attempts per word before generation fails.
    max_attempts: usize,
}

impl Default for PitchsideConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            grid_size: 16,
            word_count: DEFAULT_WORD_COUNT,
            max_word_len: DEFAULT_MAX_WORD_LEN,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl PitchsideConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(grid_size = config.grid_size, data_dir = %config.data_dir.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the config to use.
    ///
    /// An explicit path must exist. Otherwise `PITCHSIDE_CONFIG` is tried,
    /// then `pitchside.toml` in the working directory, then defaults.
    #[instrument(skip(explicit))]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::from_file(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            return Self::from_file(fallback);
        }
        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Checks that a puzzle can be built with these settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a zero grid, a word limit wider than the
    /// grid, no placement attempts, no words, or more words than palette colors.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::new("grid_size must be at least 1".to_string()));
        }
        if self.max_word_len == 0 || self.max_word_len > self.grid_size {
            return Err(ConfigError::new(format!(
                "max_word_len must be between 1 and grid_size ({}), got {}",
                self.grid_size, self.max_word_len
            )));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::new("max_attempts must be at least 1".to_string()));
        }
        if self.word_count == 0 || self.word_count > PALETTE.len() {
            return Err(ConfigError::new(format!(
                "word_count must be between 1 and {}, got {}",
                PALETTE.len(),
                self.word_count
            )));
        }
        Ok(())
    }

    /// Puzzle generator matching these settings.
    pub fn generator(&self) -> Generator {
        Generator::new(self.grid_size).with_max_attempts(self.max_attempts)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
