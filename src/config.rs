//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a console game.
///
/// Every field is optional in the file; missing player names are asked for
/// at the start of the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name of the player commanding White.
    #[serde(default)]
    white_name: Option<String>,

    /// Name of the player commanding Black.
    #[serde(default)]
    black_name: Option<String>,

    /// Print the board after every move.
    #[serde(default = "default_show_board")]
    show_board: bool,
}

fn default_show_board() -> bool {
    true
}

impl GameConfig {
    /// Creates a configuration that asks for both names and shows the board.
    pub fn new() -> Self {
        Self {
            white_name: None,
            black_name: None,
            show_board: default_show_board(),
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {e}")))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Sets White's name, keeping the current one when `name` is `None`.
    pub fn with_white_name(mut self, name: Option<String>) -> Self {
        if name.is_some() {
            self.white_name = name;
        }
        self
    }

    /// Sets Black's name, keeping the current one when `name` is `None`.
    pub fn with_black_name(mut self, name: Option<String>) -> Self {
        if name.is_some() {
            self.black_name = name;
        }
        self
    }

    /// Sets whether the board is printed.
    pub fn with_show_board(mut self, show_board: bool) -> Self {
        self.show_board = show_board;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
