use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::{GameSession, Player};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: PlayerConfig,
    pub two: PlayerConfig,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: PlayerConfig {
                name: "Player One".into(),
                marker: '1',
            },
            two: PlayerConfig {
                name: "Player Two".into(),
                marker: '2',
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub marker: char,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Marker printed for empty cells on the console board.
    pub empty_marker: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { empty_marker: '0' }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let seats = [("one", &self.players.one), ("two", &self.players.two)];

        for (seat, player) in seats {
            if player.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "players.{seat}.name must not be empty"
                )));
            }
            if player.marker.is_whitespace() {
                return Err(ConfigError::Validation(format!(
                    "players.{seat}.marker must be visible"
                )));
            }
            if player.marker == self.display.empty_marker {
                return Err(ConfigError::Validation(format!(
                    "players.{seat}.marker must differ from display.empty_marker"
                )));
            }
        }

        if self.players.one.marker == self.players.two.marker {
            return Err(ConfigError::Validation(
                "players.one.marker and players.two.marker must differ".into(),
            ));
        }

        Ok(())
    }

    /// Start a new game with the configured players.
    pub fn new_session(&self) -> GameSession {
        GameSession::new(
            Player::new(self.players.one.name.trim(), self.players.one.marker),
            Player::new(self.players.two.name.trim(), self.players.two.marker),
        )
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
