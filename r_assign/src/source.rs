//! Shallow, right-biased merging of source bags.

use serde_json::{Map, Value};
use tracing::debug;

/// A merged source, and the shape of every transform result.
///
/// Plain maps carry no inherited members, so lookups only ever observe keys
/// that some source assigned explicitly.
pub type Source = Map<String, Value>;

/// Overlay the own keys of every source, left to right, onto a fresh map.
///
/// Later sources overwrite earlier ones key by key; nested objects are
/// replaced wholesale rather than merged. Objects contribute their entries,
/// arrays contribute their indices (`"0"`, `"1"`, ...) and strings contribute
/// one single-character string per index. Null, boolean and numeric sources
/// have no own keys and are skipped.
///
/// # Examples
///
/// ```rust
/// use r_assign::merge_sources;
/// use serde_json::json;
///
/// let first = json!({"a": 1, "b": {"x": 1}});
/// let second = json!({"a": 2, "b": {"y": 2}});
/// let merged = merge_sources([&first, &second]);
/// assert_eq!(merged["a"], json!(2));
/// assert_eq!(merged["b"], json!({"y": 2}));
/// ```
pub fn merge_sources<'a, I>(sources: I) -> Source
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut merged = Source::new();
    for (index, source) in sources.into_iter().enumerate() {
        overlay(&mut merged, index, source);
    }
    merged
}

fn overlay(target: &mut Source, index: usize, source: &Value) {
    match source {
        Value::Object(map) => {
            for (key, value) in map {
                target.insert(key.clone(), value.clone());
            }
        }
        Value::Array(items) => {
            for (position, item) in items.iter().enumerate() {
                target.insert(position.to_string(), item.clone());
            }
        }
        Value::String(text) => {
            for (position, ch) in text.chars().enumerate() {
                target.insert(position.to_string(), Value::String(ch.to_string()));
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {
            debug!(
                index,
                kind = value_kind(source),
                "source has no own keys; skipping"
            );
        }
    }
}

/// Short human-readable name for the kind of a JSON value.
pub(crate) const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
