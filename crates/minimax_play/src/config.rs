//! Match configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use minimax_tictactoe::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a human-versus-engine match.
///
/// Every field has a default, so an empty file is a valid config.
/// Command-line flags override values read from disk.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Mark played by the human (`"X"` moves first).
    #[serde(default = "default_human")]
    human: Player,

    /// Show per-move minimax scores before each human move.
    #[serde(default)]
    hints: bool,

    /// Name shown for the human participant.
    #[serde(default = "default_human_name")]
    human_name: String,

    /// Name shown for the engine participant.
    #[serde(default = "default_engine_name")]
    engine_name: String,
}

#[instrument]
fn default_human() -> Player {
    Player::X
}

#[instrument]
fn default_human_name() -> String {
    "Human".to_string()
}

#[instrument]
fn default_engine_name() -> String {
    "Minimax".to_string()
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(human = %config.human, hints = config.hints, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Returns a copy with the human playing `mark`.
    pub fn with_human(mut self, mark: Player) -> Self {
        self.human = mark;
        self
    }

    /// Returns a copy with hints switched on or off.
    pub fn with_hints(mut self, hints: bool) -> Self {
        self.hints = hints;
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            hints: false,
            human_name: default_human_name(),
            engine_name: default_engine_name(),
        }
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
