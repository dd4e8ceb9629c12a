//! Check a target document against a recorded schema dump.
//!
//! A dump is a compiled set of per-path type assertions: for every entry,
//! re-resolve the path against the target and compare type tags.

use crate::schema::enumerate::{JsonType, SchemaEntry};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One failed assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// The recorded path no longer resolves in the target.
    Missing { path: String },
    /// The path resolves but to a value of a different type.
    TypeMismatch {
        path: String,
        expected: JsonType,
        actual: JsonType,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub checked: usize,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_conformant(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Run every dump entry's assertion against `target`. Violations come out
/// in dump order.
pub fn validate(dump: &[SchemaEntry], target: &Value) -> ValidationReport {
    let mut violations = Vec::new();

    for entry in dump {
        match entry.path.resolve(target) {
            None => violations.push(Violation::Missing {
                path: entry.rendered.clone(),
            }),
            Some(found) => {
                let actual = JsonType::of(found);
                if actual != entry.kind {
                    violations.push(Violation::TypeMismatch {
                        path: entry.rendered.clone(),
                        expected: entry.kind,
                        actual,
                    });
                }
            }
        }
    }

    ValidationReport {
        checked: dump.len(),
        violations,
    }
}
