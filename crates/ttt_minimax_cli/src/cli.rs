//! Command-line interface for ttt_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ttt_minimax::{Board, Player};

/// Perfect-play tic-tac-toe solver
#[derive(Parser, Debug)]
#[command(name = "ttt_minimax")]
#[command(about = "Exhaustive minimax search for tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for a position
    Best {
        /// Board in row notation, e.g. "X.O/.X./..O"
        #[arg(short, long, default_value = ".........")]
        board: Board,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print every legal move with its minimax value
    Analyze {
        /// Board in row notation, e.g. "X.O/.X./..O"
        #[arg(short, long, default_value = ".........")]
        board: Board,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play both sides optimally until the game ends
    SelfPlay {
        /// Starting board in row notation
        #[arg(short, long, default_value = ".........")]
        board: Board,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play interactively against the solver
    Play {
        /// Side the human plays (overrides the config file)
        #[arg(long)]
        human: Option<Player>,
    },
}
