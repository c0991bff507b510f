//! authscan core
//!
//! Scans authentication logs for failed password attempts and produces:
//! - a per-address frequency map of failures
//! - the suspicious subset at or above a threshold
//! - `suspicious_ips.txt` / `suspicious_ips.csv` export content
//! - console report sections, including an optional ranked table
//!
//! Nothing here touches the filesystem; callers hand in a reader and decide
//! where rendered output goes.

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod export;
pub mod extract;
pub mod report;
pub mod table;
pub mod types;

pub use aggregate::{aggregate, FrequencyMap};
pub use classify::{classify, SuspiciousSet};
pub use config::{AnalyzerConfig, ExportPaths};
pub use export::{parse_csv, render_csv, render_txt, CsvParseError};
pub use extract::{FailureExtractor, FailureScanner, ScanStats};
pub use table::TableFormatter;
pub use types::Address;
