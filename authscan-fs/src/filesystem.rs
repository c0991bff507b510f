//! Filesystem trait and implementations.
//!
//! Log files are only ever opened for reading. Export artifacts are written
//! with temp-file-then-rename so a reader never sees a half-written file.

use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use thiserror::Error;

/// Errors from filesystem operations.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("path error: {0}")]
    Path(String),
}

impl FsError {
    /// Whether this error means the path does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::Io(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

/// Trait for filesystem operations.
/// Abstracted for testing with mock implementations.
pub trait Filesystem: Send + Sync {
    /// Open a file for buffered, line-oriented reading.
    fn open_read(&self, path: &Path) -> Result<Box<dyn BufRead>, FsError>;

    /// Write data atomically to a path (write to temp, then rename).
    /// An existing file at `path` is replaced.
    fn write_atomic(&self, path: &Path, data: &[u8]) -> Result<(), FsError>;

    /// Create directory and parents if needed.
    fn create_dir_all(&self, path: &Path) -> Result<(), FsError>;
}

/// Sibling temp path used by `write_atomic`.
///
/// The full file name is kept and `.tmp` appended, so `a.txt` and `a.csv`
/// in the same directory never share a temp file.
pub fn temp_path_for(path: &Path) -> Result<PathBuf, FsError> {
    let name = path
        .file_name()
        .ok_or_else(|| FsError::Path(format!("no file name in {}", path.display())))?;
    let mut temp_name = OsString::from(name);
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFilesystem;

impl Filesystem for RealFilesystem {
    fn open_read(&self, path: &Path) -> Result<Box<dyn BufRead>, FsError> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn write_atomic(&self, path: &Path, data: &[u8]) -> Result<(), FsError> {
        let temp_path = temp_path_for(path)?;

        fs::write(&temp_path, data)?;

        if let Err(e) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), FsError> {
        fs::create_dir_all(path)?;
        Ok(())
    }
}

/// Mock filesystem for testing.
/// Cloning creates a new handle to the same underlying data.
#[derive(Debug, Clone, Default)]
pub struct MockFilesystem {
    files: Arc<RwLock<HashMap<PathBuf, Vec<u8>>>>,
    dirs: Arc<RwLock<HashSet<PathBuf>>>,
    failing_writes: Arc<RwLock<HashSet<PathBuf>>>,
    failing_reads: Arc<RwLock<HashSet<PathBuf>>>,
    truncated_reads: Arc<RwLock<HashMap<PathBuf, usize>>>,
}

impl MockFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get content of a specific file.
    pub fn get_file(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.read().unwrap().get(path).cloned()
    }

    /// Add a file directly (for test setup).
    pub fn add_file(&self, path: PathBuf, data: Vec<u8>) {
        self.files.write().unwrap().insert(path, data);
    }

    /// Make every write to `path` fail with permission denied.
    pub fn fail_writes_to(&self, path: PathBuf) {
        self.failing_writes.write().unwrap().insert(path);
    }

    /// Make opening `path` fail with permission denied, even if it exists.
    pub fn fail_reads_from(&self, path: PathBuf) {
        self.failing_reads.write().unwrap().insert(path);
    }

    /// Let `path` open normally, but fail every read after `bytes` bytes.
    pub fn fail_reads_after(&self, path: PathBuf, bytes: usize) {
        self.truncated_reads.write().unwrap().insert(path, bytes);
    }

    /// Whether `create_dir_all` was called for `path`.
    pub fn has_dir(&self, path: &Path) -> bool {
        self.dirs.read().unwrap().contains(path)
    }

    fn denied(path: &Path) -> FsError {
        FsError::Io(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("permission denied: {}", path.display()),
        ))
    }

    fn not_found(path: &Path) -> FsError {
        FsError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("file not found: {}", path.display()),
        ))
    }
}

impl Filesystem for MockFilesystem {
    fn open_read(&self, path: &Path) -> Result<Box<dyn BufRead>, FsError> {
        if self.failing_reads.read().unwrap().contains(path) {
            return Err(Self::denied(path));
        }
        let data = match self.files.read().unwrap().get(path) {
            Some(data) => data.clone(),
            None => return Err(Self::not_found(path)),
        };
        match self.truncated_reads.read().unwrap().get(path) {
            Some(&remaining) => Ok(Box::new(BufReader::new(FailAfter {
                inner: Cursor::new(data),
                remaining,
            }))),
            None => Ok(Box::new(Cursor::new(data))),
        }
    }

    fn write_atomic(&self, path: &Path, data: &[u8]) -> Result<(), FsError> {
        if self.failing_writes.read().unwrap().contains(path) {
            return Err(Self::denied(path));
        }
        self.files
            .write()
            .unwrap()
            .insert(path.to_path_buf(), data.to_vec());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), FsError> {
        self.dirs.write().unwrap().insert(path.to_path_buf());
        Ok(())
    }
}

/// Reader that yields `remaining` bytes of `inner`, then errors.
struct FailAfter {
    inner: Cursor<Vec<u8>>,
    remaining: usize,
}

impl Read for FailAfter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::Other, "device read error"));
        }
        let limit = buf.len().min(self.remaining);
        let n = self.inner.read(&mut buf[..limit])?;
        self.remaining -= n;
        Ok(n)
    }
}
