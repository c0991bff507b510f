//! Filesystem abstraction for authscan.
//!
//! This crate provides:
//! - Filesystem trait for reading logs and writing export artifacts
//! - RealFilesystem backed by `std::fs`
//! - MockFilesystem for tests, with failure injection

pub mod filesystem;

pub use filesystem::{temp_path_for, Filesystem, FsError, MockFilesystem, RealFilesystem};
