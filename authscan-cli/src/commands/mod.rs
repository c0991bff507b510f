//! Command orchestration.
//!
//! authscan has a single command: scan the log, print the report, and
//! optionally export and print the table.

pub mod analyze;

pub use analyze::{execute_analyze, AnalyzeResult};

use crate::cli::CliError;
use crate::io::{ExportWriteError, LogInputError};
use thiserror::Error;

/// Errors from command execution.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] CliError),

    #[error("{0}")]
    Input(#[from] LogInputError),

    #[error("export failed: {0}")]
    Export(#[from] ExportWriteError),

    #[error("failed to write report: {0}")]
    Console(#[from] std::io::Error),
}

/// Result of command execution.
pub type CommandResult<T> = Result<T, CommandError>;
