//! Per-severity record counts.

use crate::record::LogRecord;
use std::collections::BTreeMap;

/// Partition records by severity tag and count each group.
///
/// Grouping is exact string equality on the tag; the BTreeMap keeps group
/// order lexicographic regardless of input order.
pub fn severity_totals(records: &[LogRecord]) -> BTreeMap<String, u64> {
    let mut totals: BTreeMap<String, u64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.severity.clone()).or_default() += 1;
    }
    totals
}

/// Render totals as one `"<count> <tag>"` line per group.
pub fn render_totals_text(totals: &BTreeMap<String, u64>) -> String {
    let mut out = String::new();
    for (tag, count) in totals {
        out.push_str(&format!("{} {}\n", count, tag));
    }
    out
}
