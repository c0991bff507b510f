//! Export content for the suspicious set.
//!
//! Formats:
//! - text: `<address> <count>` per line
//! - CSV: `ip,failed_attempts` header, then `<address>,<count>` per line
//!
//! Addresses are digits and dots only, so CSV fields never need quoting.
//! Rows follow the suspicious set's first-seen order.

use crate::classify::SuspiciousSet;
use crate::types::Address;

/// CSV header row (without newline).
pub const CSV_HEADER: &str = "ip,failed_attempts";

/// Errors from parsing exported CSV back.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CsvParseError {
    #[error("missing header row")]
    MissingHeader,

    #[error("unexpected header {found:?}, expected \"ip,failed_attempts\"")]
    BadHeader { found: String },

    #[error("line {line}: expected 2 fields, got {row:?}")]
    BadRow { line: usize, row: String },

    #[error("line {line}: invalid count {value:?}")]
    BadCount { line: usize, value: String },
}

/// Render the text export. Empty set gives an empty string.
pub fn render_txt(set: &SuspiciousSet) -> String {
    let mut out = String::new();
    for (addr, count) in set.iter() {
        out.push_str(&format!("{addr} {count}\n"));
    }
    out
}

/// Render the CSV export. Empty set gives the header line only.
pub fn render_csv(set: &SuspiciousSet) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + set.len() * 24);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for (addr, count) in set.iter() {
        out.push_str(&format!("{addr},{count}\n"));
    }
    out
}

/// Parse CSV produced by [`render_csv`] into (address, count) pairs.
///
/// Blank lines are skipped. Line numbers in errors are 1-based.
pub fn parse_csv(content: &str) -> Result<Vec<(Address, u64)>, CsvParseError> {
    let mut lines = content.lines().enumerate();

    match lines.next() {
        Some((_, header)) if header.trim() == CSV_HEADER => {}
        Some((_, header)) => {
            return Err(CsvParseError::BadHeader {
                found: header.to_string(),
            })
        }
        None => return Err(CsvParseError::MissingHeader),
    }

    let mut rows = Vec::new();
    for (line_num, line) in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (ip, count) = match line.split_once(',') {
            Some((ip, count)) if !ip.is_empty() && !count.contains(',') => (ip, count),
            _ => {
                return Err(CsvParseError::BadRow {
                    line: line_num + 1,
                    row: line.to_string(),
                })
            }
        };

        let count: u64 = count.parse().map_err(|_| CsvParseError::BadCount {
            line: line_num + 1,
            value: count.to_string(),
        })?;

        rows.push((Address::new(ip), count));
    }

    Ok(rows)
}
