//! Set-style differences between two JSON arrays.
//!
//! Two flavors: whole-record structural diff (deep value equality) and a
//! projected diff over the deduplicated severity-tag sets of each side.

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Result of a whole-record structural diff.
///
/// `missing` holds elements of the left operand with no structural match in
/// the right one; `added` is the symmetric complement. Surviving elements
/// keep their source order. Duplicates on a side each test membership
/// independently, so a duplicated unmatched element survives twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffResult {
    pub missing: Vec<Value>,
    pub added: Vec<Value>,
}

impl DiffResult {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.added.is_empty()
    }
}

/// Compute `{missing: left − right, added: right − left}` by deep structural
/// equality (`serde_json::Value` equality: object key sets and values must
/// match exactly, arrays elementwise in order).
pub fn diff(left: &[Value], right: &[Value]) -> DiffResult {
    DiffResult {
        missing: left.iter().filter(|v| !right.contains(v)).cloned().collect(),
        added: right.iter().filter(|v| !left.contains(v)).cloned().collect(),
    }
}

/// Result of a severity-tag set diff, both key lists sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDiffResult {
    pub missing_keys: Vec<String>,
    pub added_keys: Vec<String>,
}

impl KeyDiffResult {
    pub fn is_empty(&self) -> bool {
        self.missing_keys.is_empty() && self.added_keys.is_empty()
    }
}

/// Which direction of a key diff constitutes the failing assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertMode {
    /// Fail iff a tag present on the left is absent from the right.
    NoMissing,
    /// Fail iff the right side introduced a tag the left never had.
    NoAdded,
    /// Fail on any difference in either direction.
    Both,
    /// Report only, never fail.
    None,
}

impl AssertMode {
    pub fn passes(self, diff: &KeyDiffResult) -> bool {
        match self {
            AssertMode::NoMissing => diff.missing_keys.is_empty(),
            AssertMode::NoAdded => diff.added_keys.is_empty(),
            AssertMode::Both => diff.is_empty(),
            AssertMode::None => true,
        }
    }
}

/// Diff the deduplicated severity-tag sets of two record arrays.
///
/// Each element must carry a string `"severity"` field; anything else is a
/// fatal error naming the offending index.
pub fn key_diff(left: &[Value], right: &[Value]) -> anyhow::Result<KeyDiffResult> {
    let left_keys = severity_keys(left).context("left operand")?;
    let right_keys = severity_keys(right).context("right operand")?;

    Ok(KeyDiffResult {
        missing_keys: left_keys.difference(&right_keys).cloned().collect(),
        added_keys: right_keys.difference(&left_keys).cloned().collect(),
    })
}

fn severity_keys(records: &[Value]) -> anyhow::Result<BTreeSet<String>> {
    let mut keys = BTreeSet::new();
    for (idx, record) in records.iter().enumerate() {
        match record.get("severity").and_then(Value::as_str) {
            Some(tag) => {
                keys.insert(tag.to_string());
            }
            None => bail!("record {} has no string \"severity\" field", idx),
        }
    }
    Ok(keys)
}
