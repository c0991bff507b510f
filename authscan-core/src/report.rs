//! Console report sections.
//!
//! Each function returns the exact text of one section so callers can print
//! it and tests can compare it byte for byte. Sections after the first start
//! with a blank line.

use std::path::Path;

use crate::aggregate::FrequencyMap;
use crate::classify::SuspiciousSet;
use crate::config::ExportPaths;
use crate::table::{TableFormatter, TABLE_UNAVAILABLE_HINT};

/// Ranked summary of every observed address, highest count first.
pub fn render_summary(map: &FrequencyMap, top_n: usize) -> String {
    let mut out = String::from("=== Summary (top IPs) ===\n");
    for (addr, count) in map.top(top_n) {
        out.push_str(&format!("{addr}: {count}\n"));
    }
    out
}

/// Suspicious addresses with a warning marker, or a single all-clear line.
pub fn render_suspicious(set: &SuspiciousSet) -> String {
    if set.is_empty() {
        return "\nNo suspicious IPs found.\n".to_string();
    }

    let mut out = format!(
        "\n=== Suspicious IPs (threshold >= {}) ===\n",
        set.threshold()
    );
    for (addr, count) in set.iter() {
        out.push_str(&format!("{addr} - {count} failed attempts \u{26a0}\n"));
    }
    out
}

/// Confirmation printed after both export files were written.
pub fn render_export_confirmation(paths: &ExportPaths) -> String {
    format!(
        "\nExported {} and {}\n",
        display_path(&paths.txt),
        display_path(&paths.csv)
    )
}

/// Ranked table of the top addresses, or the hint when tables are compiled out.
pub fn render_table(map: &FrequencyMap, top_n: usize, formatter: TableFormatter) -> String {
    match formatter.render(&map.top(top_n)) {
        Some(table) => format!("\nFailure table (top {top_n}):\n{table}"),
        None => format!("\n{TABLE_UNAVAILABLE_HINT}\n"),
    }
}

fn display_path(path: &Path) -> String {
    path.display().to_string()
}
