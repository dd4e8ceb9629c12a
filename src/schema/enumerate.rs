//! Depth-first enumeration of every addressable node with its runtime type.

use crate::schema::path::{SchemaPath, Segment};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Runtime type tag of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonType::Null,
            Value::Bool(_) => JsonType::Boolean,
            Value::Number(_) => JsonType::Number,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }

    pub fn is_scalar(self) -> bool {
        !matches!(self, JsonType::Array | JsonType::Object)
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonType::Null => "null",
            JsonType::Boolean => "boolean",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        };
        f.write_str(name)
    }
}

/// One enumerated node: its path (structured and rendered) and the type
/// observed there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaEntry {
    pub path: SchemaPath,
    pub rendered: String,
    #[serde(rename = "type")]
    pub kind: JsonType,
}

/// Enumerate every node of `doc` in depth-first pre-order: the root first,
/// then array elements by ascending index and object fields in key order.
/// Each node is visited exactly once.
///
/// `max_depth` caps the traversal: nodes deeper than it are skipped, not an
/// error. The root is depth 0.
pub fn enumerate(doc: &Value, max_depth: Option<usize>) -> Vec<SchemaEntry> {
    let mut entries = Vec::new();
    let mut segments = Vec::new();
    walk(doc, &mut segments, max_depth, &mut entries);
    entries
}

fn walk(
    node: &Value,
    segments: &mut Vec<Segment>,
    max_depth: Option<usize>,
    entries: &mut Vec<SchemaEntry>,
) {
    if let Some(max) = max_depth {
        if segments.len() > max {
            return;
        }
    }

    let path = SchemaPath::new(segments.clone());
    entries.push(SchemaEntry {
        rendered: path.to_string(),
        kind: JsonType::of(node),
        path,
    });

    match node {
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                segments.push(Segment::Index(i));
                walk(item, segments, max_depth, entries);
                segments.pop();
            }
        }
        Value::Object(fields) => {
            for (key, value) in fields {
                segments.push(Segment::Key(key.clone()));
                walk(value, segments, max_depth, entries);
                segments.pop();
            }
        }
        _ => {}
    }
}
