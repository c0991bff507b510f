//! Exit codes for the authscan CLI.

use crate::commands::CommandError;

/// Exit code constants.
pub mod codes {
    /// Successful execution.
    pub const SUCCESS: u8 = 0;
    /// Invalid arguments.
    pub const INVALID_ARGS: u8 = 1;
    /// Log file missing or unreadable.
    pub const INPUT_ERROR: u8 = 2;
    /// Export files could not be written (summary was still printed).
    pub const EXPORT_ERROR: u8 = 3;
    /// Report could not be written to stdout.
    pub const OUTPUT_ERROR: u8 = 4;
}

/// Map a CommandError to an exit code.
pub fn exit_code(error: &CommandError) -> u8 {
    match error {
        CommandError::InvalidArgument(_) => codes::INVALID_ARGS,
        CommandError::Input(_) => codes::INPUT_ERROR,
        CommandError::Export(_) => codes::EXPORT_ERROR,
        CommandError::Console(_) => codes::OUTPUT_ERROR,
    }
}
