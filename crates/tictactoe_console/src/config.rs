//! Session configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{Game, Mark, Player};
use tracing::{debug, info, instrument};

const DEFAULT_PLAYER_ONE: &str = "Player 1";
const DEFAULT_PLAYER_TWO: &str = "Player 2";

/// Name and mark for one seat. Both keys are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerConfig {
    /// Display name.
    name: Option<String>,

    /// Mark character, `"X"` or `"O"`.
    mark: Option<Mark>,
}

impl PlayerConfig {
    /// Creates a seat configuration.
    pub fn new(name: Option<String>, mark: Option<Mark>) -> Self {
        Self { name, mark }
    }
}

/// Configuration for a console session.
///
/// ```toml
/// [player_one]
/// name = "Alice"
/// mark = "O"
///
/// [player_two]
/// name = "Bob"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// First player, who also moves first.
    player_one: PlayerConfig,

    /// Second player.
    player_two: PlayerConfig,
}

impl SessionConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces player names with the ones given, keeping the rest.
    pub fn with_names(mut self, player_one: Option<String>, player_two: Option<String>) -> Self {
        if player_one.is_some() {
            self.player_one.name = player_one;
        }
        if player_two.is_some() {
            self.player_two.name = player_two;
        }
        self
    }

    /// Resolves both seats into players.
    ///
    /// Missing names fall back to "Player 1" and "Player 2". A missing
    /// mark is the opposite of the other seat's, and player one takes X
    /// when neither seat names a mark.
    #[instrument(skip(self))]
    pub fn players(&self) -> Result<(Player, Player), ConfigError> {
        let one_mark = self
            .player_one
            .mark
            .or(self.player_two.mark.map(Mark::opponent))
            .unwrap_or(Mark::X);
        let two_mark = self.player_two.mark.unwrap_or(one_mark.opponent());

        let one = resolve_player(&self.player_one, DEFAULT_PLAYER_ONE, one_mark)?;
        let two = resolve_player(&self.player_two, DEFAULT_PLAYER_TWO, two_mark)?;
        debug!(player_one = %one, player_two = %two, "Players resolved");
        Ok((one, two))
    }

    /// Builds a game from the configured players.
    #[instrument(skip(self))]
    pub fn build_game(&self) -> Result<Game, ConfigError> {
        let (one, two) = self.players()?;
        Game::new(one, two).map_err(|e| ConfigError::new(e.to_string()))
    }
}

fn resolve_player(config: &PlayerConfig, default_name: &str, mark: Mark) -> Result<Player, ConfigError> {
    let name = config.name.as_deref().unwrap_or(default_name);
    Player::new(name, mark).map_err(|e| ConfigError::new(format!("{e} (got {name:?})")))
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
