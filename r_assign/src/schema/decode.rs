//! Decoding schemas from untyped JSON input.

use std::sync::Arc;

use serde_json::Value;

use crate::{AssignError, AssignResult, TransformRegistry};

use super::{Schema, SchemaEntry};

impl Schema {
    /// Decode a schema from an untyped JSON value.
    ///
    /// Objects contribute their entries; arrays contribute one entry per
    /// element keyed by index (`"0"`, `"1"`, ...), the same way array sources
    /// are merged. Every string entry that names a transform in `registry`
    /// becomes invocable. All other entries are kept as
    /// [`SchemaEntry::Opaque`] so the failure surfaces, naming the key, when
    /// the schema is applied.
    ///
    /// # Errors
    ///
    /// Returns [`AssignError::InvalidSchema`] when `value` is null, a boolean,
    /// a number or a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use r_assign::{Schema, TransformRegistry};
    /// use serde_json::json;
    ///
    /// let registry = TransformRegistry::new().with("identity", |v, _, _| v.cloned());
    /// let schema = Schema::from_value(&json!({"id": "identity", "x": 5}), &registry)?;
    /// assert!(schema.get("id").is_some_and(|entry| entry.is_invocable()));
    /// assert!(schema.get("x").is_some_and(|entry| !entry.is_invocable()));
    ///
    /// let indexed = Schema::from_value(&json!(["identity"]), &registry)?;
    /// assert_eq!(indexed.keys().collect::<Vec<_>>(), vec!["0"]);
    /// # Ok::<_, std::sync::Arc<r_assign::AssignError>>(())
    /// ```
    pub fn from_value(value: &Value, registry: &TransformRegistry) -> AssignResult<Self> {
        match value {
            Value::Object(map) => Ok(map
                .iter()
                .map(|(key, entry)| (key.clone(), resolve_entry(entry, registry)))
                .collect()),
            Value::Array(items) => Ok(items
                .iter()
                .enumerate()
                .map(|(position, entry)| (position.to_string(), resolve_entry(entry, registry)))
                .collect()),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                Err(AssignError::invalid_schema(value))
            }
        }
    }
}

fn resolve_entry(entry: &Value, registry: &TransformRegistry) -> SchemaEntry {
    entry
        .as_str()
        .and_then(|name| registry.get(name))
        .map_or_else(
            || SchemaEntry::Opaque(entry.clone()),
            |transform| SchemaEntry::Transform(Arc::clone(transform)),
        )
}
