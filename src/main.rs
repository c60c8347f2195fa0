//! Tic Tac Toe - unified CLI.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe::{AppConfig, Cli, Command, run_tui, watch};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play {
        mode: None,
        seed: None,
    }) {
        Command::Play { mode, seed } => {
            let config = config.with_overrides(mode.map(Into::into), seed, cli.log_file);
            run_tui(&config)
        }
        Command::Watch { seed } => {
            let config = config.with_overrides(None, seed, cli.log_file);
            run_watch(&config)
        }
    }
}

/// Run one computer-vs-computer game on stdout
fn run_watch(config: &AppConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let outcome = watch(config.random_source(), &mut std::io::stdout().lock())?;
    info!(%outcome, "Watch finished");
    Ok(())
}
