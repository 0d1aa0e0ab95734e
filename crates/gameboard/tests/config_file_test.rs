//! Tests for loading game configuration from disk.

use gameboard::{GameConfig, GameController, Opponent, TurnPolicy};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_from_file_loads_values() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("gameboard.toml");
    fs::write(
        &path,
        r#"player_one_name = "Ana"
player_two_name = "Bia"
opponent = "human"
turn_policy = "advance_on_accept"
"#,
    )
    .expect("Failed to write TOML");

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.player_one_name(), "Ana");
    assert_eq!(config.player_two_name(), "Bia");
    assert_eq!(*config.opponent(), Opponent::Human);
    assert_eq!(*config.turn_policy(), TurnPolicy::AdvanceOnAccept);

    let game = GameController::new(&config);
    assert_eq!(game.active_player().name(), "Ana");
    assert_eq!(game.opponent(), Opponent::Human);
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "this is not valid toml !!!@@@").expect("Write failed");

    let err = GameConfig::from_file(&path).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}
