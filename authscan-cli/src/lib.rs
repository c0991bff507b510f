//! authscan CLI.
//!
//! This crate provides the command-line interface for authscan.
//! It handles argument parsing, logging, file IO and exit codes around the
//! analysis in `authscan-core`.

pub mod cli;
pub mod commands;
pub mod exit;
pub mod io;
pub mod logger;

pub use cli::{parse_from, Cli, CliError};
pub use commands::{execute_analyze, AnalyzeResult, CommandError, CommandResult};
pub use logger::{Logger, MockLogger, StderrLogger, Verbosity};
