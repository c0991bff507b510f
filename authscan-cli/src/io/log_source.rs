//! Opening the auth log.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use authscan_fs::{Filesystem, FsError};
use thiserror::Error;

/// Errors that stop a run before (or while) the log is scanned.
#[derive(Debug, Error)]
pub enum LogInputError {
    #[error("log file not found: {0}")]
    NotFound(PathBuf),

    #[error("cannot open log file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    #[error("read failed in log file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Open the log at `path` for line-by-line reading.
pub fn open_log<F: Filesystem>(fs: &F, path: &Path) -> Result<Box<dyn BufRead>, LogInputError> {
    fs.open_read(path).map_err(|e| {
        if e.is_not_found() {
            LogInputError::NotFound(path.to_path_buf())
        } else {
            LogInputError::Unreadable {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}
