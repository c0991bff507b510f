//! Analyzer configuration and export destinations.

use std::path::{Path, PathBuf};

/// Default log scanned when no path is given.
pub const DEFAULT_LOG_PATH: &str = "/var/log/auth.log";

/// Default failure threshold (inclusive).
pub const DEFAULT_THRESHOLD: i64 = 3;

/// Number of addresses shown in the ranked summary and the table view.
pub const DEFAULT_TOP_N: usize = 20;

/// Default text export file name.
pub const DEFAULT_TXT_NAME: &str = "suspicious_ips.txt";

/// Default CSV export file name.
pub const DEFAULT_CSV_NAME: &str = "suspicious_ips.csv";

/// Where the two export artifacts are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub txt: PathBuf,
    pub csv: PathBuf,
}

impl ExportPaths {
    /// Explicit destinations.
    pub fn new(txt: impl Into<PathBuf>, csv: impl Into<PathBuf>) -> Self {
        Self {
            txt: txt.into(),
            csv: csv.into(),
        }
    }

    /// Default file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_TXT_NAME), dir.join(DEFAULT_CSV_NAME))
    }

    /// Parent directories of both paths, deduplicated, skipping bare file names.
    pub fn parent_dirs(&self) -> Vec<&Path> {
        let mut dirs: Vec<&Path> = Vec::new();
        for path in [&self.txt, &self.csv] {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if !dirs.contains(&parent) {
                    dirs.push(parent);
                }
            }
        }
        dirs
    }
}

impl Default for ExportPaths {
    /// Default file names relative to the working directory.
    fn default() -> Self {
        Self::new(DEFAULT_TXT_NAME, DEFAULT_CSV_NAME)
    }
}

/// Analyzer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub log_path: PathBuf,
    pub threshold: i64,
    pub top_n: usize,
    pub export_paths: ExportPaths,
}

impl AnalyzerConfig {
    /// Create a config with defaults for everything but the log path.
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
            threshold: DEFAULT_THRESHOLD,
            top_n: DEFAULT_TOP_N,
            export_paths: ExportPaths::default(),
        }
    }

    /// Builder: set threshold.
    pub fn with_threshold(mut self, threshold: i64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builder: set top_n.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Builder: set export paths.
    pub fn with_export_paths(mut self, paths: ExportPaths) -> Self {
        self.export_paths = paths;
        self
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.log_path, PathBuf::from("/var/log/auth.log"));
        assert_eq!(config.threshold, 3);
        assert_eq!(config.top_n, 20);
        assert_eq!(config.export_paths.txt, PathBuf::from("suspicious_ips.txt"));
        assert_eq!(config.export_paths.csv, PathBuf::from("suspicious_ips.csv"));
    }

    #[test]
    fn test_builders() {
        let config = AnalyzerConfig::new("/tmp/auth.log")
            .with_threshold(-2)
            .with_top_n(5)
            .with_export_paths(ExportPaths::in_dir(Path::new("/out")));

        assert_eq!(config.threshold, -2);
        assert_eq!(config.top_n, 5);
        assert_eq!(config.export_paths.txt, PathBuf::from("/out/suspicious_ips.txt"));
        assert_eq!(config.export_paths.csv, PathBuf::from("/out/suspicious_ips.csv"));
    }

    #[test]
    fn test_parent_dirs_default_is_empty() {
        assert!(ExportPaths::default().parent_dirs().is_empty());
    }

    #[test]
    fn test_parent_dirs_dedup() {
        let paths = ExportPaths::in_dir(Path::new("/out"));
        assert_eq!(paths.parent_dirs(), vec![Path::new("/out")]);

        let split = ExportPaths::new("/a/x.txt", "/b/x.csv");
        assert_eq!(split.parent_dirs(), vec![Path::new("/a"), Path::new("/b")]);
    }
}
