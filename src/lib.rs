//! Terminal tic-tac-toe.
//!
//! Wraps the pure [`tictactoe_core`] engine with a command line, a config
//! file, logging, and a `ratatui` presentation layer.
//!
//! # Architecture
//!
//! - **CLI**: `play` (interactive) and `watch` (computer vs computer)
//! - **Config**: optional `tictactoe.toml`, overridden by flags
//! - **TUI**: pure renderer over a [`tictactoe_core::Session`]
//!
//! # Example
//!
//! ```
//! use tictactoe::watch;
//! use tictactoe_core::SeededRandom;
//!
//! let mut transcript = Vec::new();
//! let outcome = watch(SeededRandom::new(1), &mut transcript).unwrap();
//! assert!(String::from_utf8(transcript).unwrap().contains(&outcome.to_string()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;
mod watch;

// Crate-level exports - Command line
pub use cli::{Cli, Command, ModeArg};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Terminal UI
pub use tui::{App, Screen, digit_to_coord, move_cursor, run_tui};

// Crate-level exports - Headless play
pub use watch::watch;
