//! IO helpers for CLI operations.
//!
//! Provides utilities for:
//! - Opening the auth log for scanning
//! - Writing export artifacts (suspicious_ips.txt, suspicious_ips.csv)

pub mod export_writer;
pub mod log_source;

pub use export_writer::{ExportWriteError, ExportWriter, FailedWrite, WrittenFiles};
pub use log_source::{open_log, LogInputError};
