//! Tic-tac-toe console entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_console::{Cli, LineConsole, SessionConfig, run_session};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => SessionConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => {
            debug!("No config file given, using defaults");
            SessionConfig::default()
        }
    }
    .with_names(cli.player_one, cli.player_two);

    let mut game = config.build_game().context("Failed to set up players")?;
    let mut console = LineConsole::stdio();
    let summary = run_session(&mut game, &mut console).context("Console I/O failed")?;

    info!(
        rounds = summary.rounds(),
        wins_one = summary.wins_one(),
        wins_two = summary.wins_two(),
        draws = summary.draws(),
        "Goodbye"
    );
    Ok(())
}

/// Logs go to stderr so the board on stdout stays readable.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}
