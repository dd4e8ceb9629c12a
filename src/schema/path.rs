//! Accessor chains identifying one node in a JSON document.
//!
//! Example rendered path: .[0]["severity"]  =>  element 0 of the root
//! array, then its "severity" field. The bare root is ".".
//!
//! Segments serialize untagged (a bare number or string), so a dumped path
//! is machine-consumable without re-parsing the rendered form. Ordering is
//! derived so paths sort stably in maps.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One step from a node to a child: an array index or an object key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    Index(usize),
    Key(String),
}

/// Segment chain from the document root down to one node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaPath(pub Vec<Segment>);

impl SchemaPath {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self(segments)
    }

    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Node depth; the root is depth 0.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Follow the chain through `doc`. `None` when any step does not apply
    /// (wrong container kind, index out of range, absent key).
    pub fn resolve<'a>(&self, doc: &'a Value) -> Option<&'a Value> {
        let mut node = doc;
        for segment in &self.0 {
            node = match segment {
                Segment::Index(i) => node.as_array()?.get(*i)?,
                Segment::Key(k) => node.as_object()?.get(k)?,
            };
        }
        Some(node)
    }
}

impl fmt::Display for SchemaPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(".")?;
        for segment in &self.0 {
            match segment {
                Segment::Index(i) => write!(f, "[{}]", i)?,
                Segment::Key(k) => write!(f, "[{:?}]", k)?,
            }
        }
        Ok(())
    }
}
