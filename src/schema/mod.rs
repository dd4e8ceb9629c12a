//! Path-and-type schema enumeration and validation.

pub mod enumerate;
pub mod path;
pub mod validate;

pub use enumerate::{JsonType, SchemaEntry, enumerate};
pub use path::{SchemaPath, Segment};
pub use validate::{ValidationReport, Violation, validate};
