use serde::{Deserialize, Serialize};

/// A single indexed log line.
///
/// `severity` is the token before the first whitespace character, kept
/// verbatim including any bracket delimiters (e.g. `"[ERROR]"`). It is an
/// opaque grouping tag; no fixed vocabulary is enforced. `message` is the
/// verbatim remainder of the line after the boundary character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub severity: String,
    pub message: String,
}
