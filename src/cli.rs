//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_core::Mode;

/// Tic Tac Toe - play a friend or a heuristic computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Where the interactive UI writes its log
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Skip the mode menu and start in this mode
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Seed for the computer's random tie-breaks
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Watch the computer play itself, printed to stdout
    Watch {
        /// Seed for the random tie-breaks
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Game mode as spelled on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Two humans share the keyboard
    Human,
    /// The computer plays O
    Computer,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Human => Mode::HumanVsHuman,
            ModeArg::Computer => Mode::HumanVsComputer,
        }
    }
}
