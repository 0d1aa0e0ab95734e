//! Game configuration: player names, opponent kind and turn policy.

use crate::ConfigError;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Environment variable overriding player one's name.
pub const PLAYER_ONE_ENV: &str = "GAMEBOARD_PLAYER_ONE";

/// Environment variable overriding player two's name.
pub const PLAYER_TWO_ENV: &str = "GAMEBOARD_PLAYER_TWO";

/// Who controls player two.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Opponent {
    /// Player two moves automatically after every round.
    #[default]
    Computer,
    /// Both players are driven by the caller.
    Human,
}

/// Whether a rejected drop still passes the turn.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TurnPolicy {
    /// The turn passes after every round, even onto an occupied cell.
    #[default]
    AdvanceAlways,
    /// The turn passes only when the token was placed.
    AdvanceOnAccept,
}

/// Configuration for a [`crate::GameController`].
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Name of the X player.
    #[serde(default = "default_player_one")]
    #[setters(into)]
    player_one_name: String,

    /// Name of the O player.
    #[serde(default = "default_player_two")]
    #[setters(into)]
    player_two_name: String,

    /// Who controls player two.
    #[serde(default)]
    opponent: Opponent,

    /// Turn handling for occupied cells.
    #[serde(default)]
    turn_policy: TurnPolicy,
}

fn default_player_one() -> String {
    "Player X".to_string()
}

fn default_player_two() -> String {
    "Player O".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one_name: default_player_one(),
            player_two_name: default_player_two(),
            opponent: Opponent::default(),
            turn_policy: TurnPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration with custom names and default behaviour.
    #[instrument(skip_all)]
    pub fn new(player_one_name: impl Into<String>, player_two_name: impl Into<String>) -> Self {
        Self::default()
            .with_player_one_name(player_one_name)
            .with_player_two_name(player_two_name)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(
            player_one = %config.player_one_name,
            player_two = %config.player_two_name,
            opponent = %config.opponent,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies player name overrides from the process environment.
    #[instrument(skip(self))]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies player name overrides from any key lookup.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(name) = lookup(PLAYER_ONE_ENV).filter(|n| !n.trim().is_empty()) {
            debug!(%name, "Overriding player one name");
            self.player_one_name = name;
        }
        if let Some(name) = lookup(PLAYER_TWO_ENV).filter(|n| !n.trim().is_empty()) {
            debug!(%name, "Overriding player two name");
            self.player_two_name = name;
        }
        self
    }
}
