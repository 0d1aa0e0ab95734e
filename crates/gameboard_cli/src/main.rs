//! Gameboard - terminal tic-tac-toe

use anyhow::{Context, Result};
use clap::Parser;
use gameboard::GameController;
use gameboard_cli::{Cli, Screen, init_tracing};
use std::io::{self, Write};
use std::time::Duration;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let config = cli.game_config().context("Failed to load game config")?;
    info!(?config, "Starting gameboard");

    let mut screen = Screen::new(
        GameController::new(&config),
        Duration::from_millis(cli.restart_delay_ms),
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    screen.run(stdin.lock(), &mut stdout)?;

    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &screen.summary())
            .context("Failed to write JSON summary")?;
        writeln!(stdout)?;
    }

    Ok(())
}
