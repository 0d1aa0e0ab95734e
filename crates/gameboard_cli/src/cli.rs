//! Command-line interface for gameboard.

use clap::Parser;
use gameboard::{ConfigError, GameConfig, Opponent, TurnPolicy};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Gameboard - tic-tac-toe against a first-empty-cell computer
#[derive(Parser, Debug)]
#[command(name = "gameboard")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name of player one (X)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name of player two (O)
    #[arg(long)]
    pub player_two: Option<String>,

    /// Who controls player two (computer or human)
    #[arg(long)]
    pub opponent: Option<Opponent>,

    /// Keep the turn when a move lands on an occupied cell
    #[arg(long)]
    pub strict_turns: bool,

    /// Pause before a finished game restarts, in milliseconds
    #[arg(long, default_value = "1000")]
    pub restart_delay_ms: u64,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the final state as JSON on exit
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Builds the game config: defaults, then the config file, then the
    /// environment, then flags.
    #[instrument(skip(self))]
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        }
        .with_env_overrides();

        if let Some(name) = &self.player_one {
            config = config.with_player_one_name(name.as_str());
        }
        if let Some(name) = &self.player_two {
            config = config.with_player_two_name(name.as_str());
        }
        if let Some(opponent) = self.opponent {
            config = config.with_opponent(opponent);
        }
        if self.strict_turns {
            config = config.with_turn_policy(TurnPolicy::AdvanceOnAccept);
        }

        debug!(?config, "Resolved game config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "gameboard",
            "--player-one",
            "Ana",
            "--opponent",
            "human",
            "--strict-turns",
        ]);
        let config = cli.game_config().expect("No config file involved");
        assert_eq!(config.player_one_name(), "Ana");
        assert_eq!(*config.opponent(), Opponent::Human);
        assert_eq!(*config.turn_policy(), TurnPolicy::AdvanceOnAccept);
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["gameboard"]);
        assert_eq!(cli.restart_delay_ms, 1000);
        assert!(!cli.json);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_rejects_unknown_opponent() {
        assert!(Cli::try_parse_from(["gameboard", "--opponent", "minimax"]).is_err());
    }
}
