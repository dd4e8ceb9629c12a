//! Log-to-JSON toolkit: lift plain-text logs into JSON, index them into
//! typed records, aggregate severity totals, diff record arrays, and
//! dump/validate path-and-type schemas.

pub mod diff;
pub mod jsonp;
pub mod record;
pub mod schema;
pub mod totals;

pub type Result<T> = anyhow::Result<T>;

pub use diff::{AssertMode, DiffResult, KeyDiffResult, diff, key_diff};
pub use jsonp::wrap_jsonp;
pub use record::{IndexError, LogRecord, MalformedPolicy, index_lines, lift_lines};
pub use schema::{
    JsonType, SchemaEntry, SchemaPath, Segment, ValidationReport, Violation, enumerate, validate,
};
pub use totals::{render_totals_text, severity_totals};
