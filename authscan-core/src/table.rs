//! Ranked table view for the console report.
//!
//! Availability is a build-time capability (`table` feature). When it is
//! off the reporter prints [`TABLE_UNAVAILABLE_HINT`] instead, and the run
//! carries on normally.

use crate::types::Address;

/// Printed in place of the table when the capability is compiled out.
pub const TABLE_UNAVAILABLE_HINT: &str =
    "Table view not available. Rebuild with: cargo install authscan-cli --features table";

const RANK_HEADER: &str = "rank";
const IP_HEADER: &str = "ip";
const COUNT_HEADER: &str = "failed_attempts";

/// Table rendering capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormatter {
    Available,
    Unavailable,
}

impl TableFormatter {
    /// Capability of this build.
    pub fn detect() -> Self {
        if cfg!(feature = "table") {
            TableFormatter::Available
        } else {
            TableFormatter::Unavailable
        }
    }

    /// Render ranked rows as an aligned table, or `None` if unavailable.
    ///
    /// Rows are printed in the order given; rank is the 1-based position.
    pub fn render(self, rows: &[(&Address, u64)]) -> Option<String> {
        match self {
            TableFormatter::Available => Some(render_rows(rows)),
            TableFormatter::Unavailable => None,
        }
    }
}

fn render_rows(rows: &[(&Address, u64)]) -> String {
    let rank_w = RANK_HEADER.len().max(rows.len().to_string().len());
    let ip_w = rows
        .iter()
        .map(|(addr, _)| addr.as_str().len())
        .fold(IP_HEADER.len(), usize::max);
    let count_w = rows
        .iter()
        .map(|(_, count)| count.to_string().len())
        .fold(COUNT_HEADER.len(), usize::max);

    let mut out = format!(
        "{:>rank_w$}  {:<ip_w$}  {:>count_w$}\n",
        RANK_HEADER, IP_HEADER, COUNT_HEADER
    );
    for (i, (addr, count)) in rows.iter().enumerate() {
        let rank = i + 1;
        let ip = addr.as_str();
        out.push_str(&format!("{rank:>rank_w$}  {ip:<ip_w$}  {count:>count_w$}\n"));
    }
    out
}
