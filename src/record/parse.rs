use crate::record::row::LogRecord;
use regex::Regex;
use thiserror::Error;

/// Indexing failure on a single input line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    /// A non-empty line with no whitespace boundary, hence no message part.
    #[error("malformed line {line}: no whitespace boundary in {content:?}")]
    MalformedLine { line: usize, content: String },
}

/// What to do when a line cannot be split into severity and message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Abort the whole run with an [`IndexError`].
    Fail,
    /// Drop the line, warn on stderr, keep going.
    Skip,
}

/// Lift raw text into one string per line, in input order.
///
/// Line terminators are stripped; a final newline does not produce an empty
/// trailing record. Interior empty lines are kept as empty strings.
pub fn lift_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Index raw text into `{severity, message}` records.
///
/// A line splits at its first whitespace character: severity is the prefix,
/// message is the verbatim suffix after the boundary (further whitespace is
/// preserved). Blank lines are skipped. A non-empty line with no boundary,
/// or one starting with whitespace (no severity token), is malformed and
/// handled per `policy`.
pub fn index_lines(text: &str, policy: MalformedPolicy) -> anyhow::Result<Vec<LogRecord>> {
    let re = Regex::new(r"^(\S+)\s(.*)$")?;

    let mut records = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;

        if line.trim().is_empty() {
            continue;
        }

        match re.captures(line) {
            Some(caps) => {
                records.push(LogRecord {
                    severity: caps[1].to_string(),
                    message: caps[2].to_string(),
                });
            }
            None => match policy {
                MalformedPolicy::Fail => {
                    return Err(IndexError::MalformedLine {
                        line: lno,
                        content: line.to_string(),
                    }
                    .into());
                }
                MalformedPolicy::Skip => {
                    eprintln!("WARN: skipping malformed line {}: {:?}", lno, line);
                }
            },
        }
    }

    Ok(records)
}
