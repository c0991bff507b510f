//! Export writer for the suspicious set.
//!
//! Writes two files:
//! - suspicious_ips.txt - `<address> <count>` per line
//! - suspicious_ips.csv - `ip,failed_attempts` header plus one row per address
//!
//! Both files are always attempted. If either fails, the error lists every
//! file that failed.

use std::fmt;
use std::path::{Path, PathBuf};

use authscan_core::config::ExportPaths;
use authscan_core::export::{render_csv, render_txt};
use authscan_core::SuspiciousSet;
use authscan_fs::Filesystem;
use thiserror::Error;

/// One export file that could not be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedWrite {
    pub path: PathBuf,
    pub reason: String,
}

impl fmt::Display for FailedWrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path.display(), self.reason)
    }
}

/// Export failed for one or both files.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("failed to write {}", join_failures(.failures))]
pub struct ExportWriteError {
    pub failures: Vec<FailedWrite>,
}

fn join_failures(failures: &[FailedWrite]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Paths to written files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub txt: PathBuf,
    pub csv: PathBuf,
}

/// Export writer bound to a filesystem and a pair of destinations.
pub struct ExportWriter<'a, F: Filesystem> {
    fs: &'a F,
    paths: &'a ExportPaths,
}

impl<'a, F: Filesystem> ExportWriter<'a, F> {
    /// Create a new export writer.
    pub fn new(fs: &'a F, paths: &'a ExportPaths) -> Self {
        Self { fs, paths }
    }

    /// Write both artifacts, replacing any existing files.
    pub fn write_all(&self, set: &SuspiciousSet) -> Result<WrittenFiles, ExportWriteError> {
        let mut failures = Vec::new();

        for dir in self.paths.parent_dirs() {
            if let Err(e) = self.fs.create_dir_all(dir) {
                failures.push(FailedWrite {
                    path: dir.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }

        let files = [
            (&self.paths.txt, render_txt(set)),
            (&self.paths.csv, render_csv(set)),
        ];
        for (path, content) in &files {
            if let Err(reason) = self.write_one(path, content) {
                failures.push(FailedWrite {
                    path: path.to_path_buf(),
                    reason,
                });
            }
        }

        if failures.is_empty() {
            Ok(WrittenFiles {
                txt: self.paths.txt.clone(),
                csv: self.paths.csv.clone(),
            })
        } else {
            Err(ExportWriteError { failures })
        }
    }

    fn write_one(&self, path: &Path, content: &str) -> Result<(), String> {
        self.fs
            .write_atomic(path, content.as_bytes())
            .map_err(|e| e.to_string())
    }
}
