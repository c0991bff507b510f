//! CLI argument parsing for authscan.

use std::path::PathBuf;

use authscan_core::config::{AnalyzerConfig, ExportPaths, DEFAULT_LOG_PATH, DEFAULT_THRESHOLD};
use clap::{ArgAction, Parser};
use thiserror::Error;

/// Errors from CLI argument validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("log path must not be empty")]
    EmptyLogPath,

    #[error("out-dir must not be empty")]
    EmptyOutDir,
}

/// Scan an auth log for failed password attempts and flag noisy source IPs.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "authscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the authentication log to scan.
    #[arg(long, default_value = DEFAULT_LOG_PATH)]
    pub log: PathBuf,

    /// Failed attempts at or above this count mark an IP as suspicious.
    #[arg(long, default_value_t = DEFAULT_THRESHOLD, allow_negative_numbers = true)]
    pub threshold: i64,

    /// Write suspicious_ips.txt and suspicious_ips.csv.
    #[arg(long)]
    pub export: bool,

    /// Print the ranked table of the top addresses.
    #[arg(long)]
    pub show_table: bool,

    /// Directory for export files (defaults to the working directory).
    #[arg(long, requires = "export")]
    pub out_dir: Option<PathBuf>,

    /// Increase verbosity (-v for scan details, -vv for debug).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Validate the arguments.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.log.as_os_str().is_empty() {
            return Err(CliError::EmptyLogPath);
        }
        if matches!(&self.out_dir, Some(dir) if dir.as_os_str().is_empty()) {
            return Err(CliError::EmptyOutDir);
        }
        Ok(())
    }

    /// Build the analyzer config these arguments describe.
    pub fn to_config(&self) -> AnalyzerConfig {
        let export_paths = match &self.out_dir {
            Some(dir) => ExportPaths::in_dir(dir),
            None => ExportPaths::default(),
        };

        AnalyzerConfig::new(self.log.clone())
            .with_threshold(self.threshold)
            .with_export_paths(export_paths)
    }
}

/// Parse CLI arguments from an iterator of strings.
/// Useful for testing.
pub fn parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use authscan_core::config::DEFAULT_TOP_N;

    // ===========================================
    // Defaults
    // ===========================================

    #[test]
    fn test_defaults() {
        let cli = parse_from(["authscan"]).expect("parse");
        assert_eq!(cli.log, PathBuf::from("/var/log/auth.log"));
        assert_eq!(cli.threshold, 3);
        assert!(!cli.export);
        assert!(!cli.show_table);
        assert_eq!(cli.out_dir, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_all_flags() {
        let cli = parse_from([
            "authscan",
            "--log",
            "/tmp/auth.log",
            "--threshold",
            "7",
            "--export",
            "--show-table",
            "--out-dir",
            "/tmp/out",
            "-vv",
        ])
        .expect("parse");

        assert_eq!(cli.log, PathBuf::from("/tmp/auth.log"));
        assert_eq!(cli.threshold, 7);
        assert!(cli.export);
        assert!(cli.show_table);
        assert_eq!(cli.out_dir, Some(PathBuf::from("/tmp/out")));
        assert_eq!(cli.verbose, 2);
    }

    // ===========================================
    // Threshold
    // ===========================================

    #[test]
    fn test_threshold_zero() {
        let cli = parse_from(["authscan", "--threshold", "0"]).expect("parse");
        assert_eq!(cli.threshold, 0);
    }

    #[test]
    fn test_threshold_negative() {
        let cli = parse_from(["authscan", "--threshold", "-4"]).expect("parse");
        assert_eq!(cli.threshold, -4);
    }

    #[test]
    fn test_threshold_non_numeric() {
        assert!(parse_from(["authscan", "--threshold", "many"]).is_err());
    }

    // ===========================================
    // Export destination
    // ===========================================

    #[test]
    fn test_out_dir_requires_export() {
        let err = parse_from(["authscan", "--out-dir", "/tmp/out"]).unwrap_err();
        assert!(err.to_string().contains("--export"));
    }

    #[test]
    fn test_to_config_default_paths() {
        let config = parse_from(["authscan", "--export"]).expect("parse").to_config();
        assert_eq!(config.export_paths, ExportPaths::default());
        assert_eq!(config.threshold, 3);
        assert_eq!(config.top_n, DEFAULT_TOP_N);
    }

    #[test]
    fn test_to_config_out_dir() {
        let config = parse_from(["authscan", "--export", "--out-dir", "/srv/reports"])
            .expect("parse")
            .to_config();
        assert_eq!(
            config.export_paths.txt,
            PathBuf::from("/srv/reports/suspicious_ips.txt")
        );
        assert_eq!(
            config.export_paths.csv,
            PathBuf::from("/srv/reports/suspicious_ips.csv")
        );
    }

    // ===========================================
    // Validation
    // ===========================================

    #[test]
    fn test_validate_ok() {
        let cli = parse_from(["authscan", "--log", "auth.log"]).expect("parse");
        assert_eq!(cli.validate(), Ok(()));
    }

    #[test]
    fn test_validate_empty_log() {
        let mut cli = parse_from(["authscan"]).expect("parse");
        cli.log = PathBuf::new();
        assert_eq!(cli.validate(), Err(CliError::EmptyLogPath));
    }

    #[test]
    fn test_validate_empty_out_dir() {
        let mut cli = parse_from(["authscan", "--export"]).expect("parse");
        cli.out_dir = Some(PathBuf::new());
        assert_eq!(cli.validate(), Err(CliError::EmptyOutDir));
    }
}
