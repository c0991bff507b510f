//! Analyze command orchestration.
//!
//! Scans the log, prints the summary and suspicious sections, then runs the
//! optional export and table steps. An export failure does not stop the
//! table from printing; it is returned once the report is complete.

use std::io::Write;

use authscan_core::report::{
    render_export_confirmation, render_suspicious, render_summary, render_table,
};
use authscan_core::{aggregate, classify, AnalyzerConfig, FailureScanner, ScanStats, TableFormatter};
use authscan_fs::Filesystem;

use crate::cli::Cli;
use crate::io::{open_log, ExportWriter, LogInputError, WrittenFiles};
use crate::logger::Logger;

use super::{CommandError, CommandResult};

/// Result of analyze command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeResult {
    /// Line counters from the scan.
    pub stats: ScanStats,
    /// Distinct addresses with at least one failure.
    pub address_count: usize,
    /// Addresses at or above the threshold.
    pub suspicious_count: usize,
    /// Export files, when export was requested.
    pub exported: Option<WrittenFiles>,
}

/// Execute the analyze command, writing the report to `out`.
pub fn execute_analyze<F, L, W>(
    args: &Cli,
    fs: &F,
    logger: &L,
    table: TableFormatter,
    out: &mut W,
) -> CommandResult<AnalyzeResult>
where
    F: Filesystem,
    L: Logger,
    W: Write,
{
    args.validate()?;

    let config = args.to_config();
    log_config(logger, &config, args);

    let reader = open_log(fs, &config.log_path)?;
    let mut scanner = FailureScanner::new(reader);
    let map = aggregate(scanner.by_ref());
    if let Some(source) = scanner.take_error() {
        return Err(LogInputError::ReadFailed {
            path: config.log_path.clone(),
            source,
        }
        .into());
    }

    let stats = scanner.stats();
    logger.verbose(&format!(
        "scanned {} lines: {} failed logins from {} addresses",
        stats.lines_read,
        stats.lines_matched,
        map.len()
    ));
    if stats.lines_lossy > 0 {
        logger.warn(&format!(
            "{} lines in {} had invalid UTF-8; the invalid bytes were skipped",
            stats.lines_lossy,
            config.log_path.display()
        ));
    }

    let suspicious = classify(&map, config.threshold);

    out.write_all(render_summary(&map, config.top_n).as_bytes())?;
    out.write_all(render_suspicious(&suspicious).as_bytes())?;

    let mut exported = None;
    let mut export_error = None;
    if args.export {
        match ExportWriter::new(fs, &config.export_paths).write_all(&suspicious) {
            Ok(written) => {
                out.write_all(render_export_confirmation(&config.export_paths).as_bytes())?;
                logger.verbose(&format!(
                    "wrote {} entries to {} and {}",
                    suspicious.len(),
                    written.txt.display(),
                    written.csv.display()
                ));
                exported = Some(written);
            }
            Err(e) => export_error = Some(e),
        }
    }

    if args.show_table {
        out.write_all(render_table(&map, config.top_n, table).as_bytes())?;
    }
    out.flush()?;

    if let Some(e) = export_error {
        return Err(CommandError::Export(e));
    }

    Ok(AnalyzeResult {
        stats,
        address_count: map.len(),
        suspicious_count: suspicious.len(),
        exported,
    })
}

fn log_config<L: Logger>(logger: &L, config: &AnalyzerConfig, args: &Cli) {
    logger.debug(&format!(
        "log={} threshold={} top_n={} export={} show_table={}",
        config.log_path.display(),
        config.threshold,
        config.top_n,
        args.export,
        args.show_table
    ));
    if args.export {
        logger.debug(&format!(
            "export paths: {} {}",
            config.export_paths.txt.display(),
            config.export_paths.csv.display()
        ));
    }
}
