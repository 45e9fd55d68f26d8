//! ttt_minimax - perfect-play tic-tac-toe from the command line.

#![warn(missing_docs)]

mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Configuration resolved");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Best { board, json } => commands::run_best(&board, json, &mut out),
        Command::Analyze { board, json } => commands::run_analyze(&board, json, &mut out),
        Command::SelfPlay { board, json } => commands::run_self_play(&board, json, &mut out),
        Command::Play { human } => {
            let config = match human {
                Some(side) => config.with_human(side),
                None => config,
            };
            let stdin = std::io::stdin();
            commands::run_play(&config, &mut stdin.lock(), &mut out)
        }
    }
}
