//! Tests for loading session config from disk.

use std::io::Write;
use tictactoe_console::SessionConfig;
use tictactoe_core::Mark;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[player_one]\nname = \"Alice\"\n\n[player_two]\nname = \"Bob\"\nmark = \"X\"").unwrap();

    let config = SessionConfig::from_file(file.path()).unwrap();
    let game = config.build_game().unwrap();
    assert_eq!(game.player_one().name(), "Alice");
    assert_eq!(game.player_one().mark(), Mark::O);
    assert_eq!(game.player_two().mark(), Mark::X);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SessionConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.file.ends_with("config.rs"));
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = SessionConfig::from_file(file.path()).unwrap();
    assert_eq!(config, SessionConfig::default());
}
