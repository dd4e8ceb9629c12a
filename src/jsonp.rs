//! JSONP payload rendering.

use anyhow::bail;
use regex::Regex;
use serde_json::Value;

/// Wrap `doc` in a callback invocation: `callback(<compact JSON>);`.
///
/// The callback must be a dotted JS identifier; anything else is rejected
/// before it reaches the executable payload.
pub fn wrap_jsonp(doc: &Value, callback: &str) -> anyhow::Result<String> {
    let re = Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$.]*$")?;
    if !re.is_match(callback) {
        bail!("invalid JSONP callback name: {:?}", callback);
    }

    Ok(format!("{}({});\n", callback, serde_json::to_string(doc)?))
}
