//! Command-line interface for the console game.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML file with player names and marks
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name of the first player (overrides the config file)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name of the second player (overrides the config file)
    #[arg(long)]
    pub player_two: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert!(cli.config.is_none());
        assert!(cli.player_one.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "tictactoe",
            "--config",
            "players.toml",
            "--player-one",
            "Alice",
            "--player-two",
            "Bob",
            "-v",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("players.toml")));
        assert_eq!(cli.player_one.as_deref(), Some("Alice"));
        assert_eq!(cli.player_two.as_deref(), Some("Bob"));
        assert!(cli.verbose);
    }
}
