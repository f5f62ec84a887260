//! Fluent construction of [`Schema`] values.

use std::sync::Arc;

use serde_json::Value;

use crate::{SharedTransform, Source, Transform};

use super::{Schema, SchemaEntry};

/// Builder that accumulates schema entries in insertion order.
///
/// ```rust
/// use r_assign::Schema;
/// use serde_json::json;
///
/// let schema = Schema::builder()
///     .transform("id", |value, _, _| value.cloned())
///     .transform("kind", |_, _, _| Some(json!("user")))
///     .build();
/// assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["id", "kind"]);
/// ```
#[derive(Debug, Default)]
#[must_use]
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a closure transform for `key`.
    pub fn transform<F>(self, key: impl Into<String>, transform: F) -> Self
    where
        F: Fn(Option<&Value>, &str, &Source) -> Option<Value> + Send + Sync + 'static,
    {
        self.shared(key, Arc::new(transform))
    }

    /// Add a value implementing [`Transform`] for `key`.
    pub fn entry<T>(self, key: impl Into<String>, transform: T) -> Self
    where
        T: Transform + 'static,
    {
        self.shared(key, Arc::new(transform))
    }

    /// Add an already shared transform for `key`.
    pub fn shared(self, key: impl Into<String>, transform: SharedTransform) -> Self {
        self.with_entry(key, SchemaEntry::Transform(transform))
    }

    /// Add a non-invocable value for `key`.
    ///
    /// Applying a schema that contains an opaque entry fails once iteration
    /// reaches that key.
    pub fn opaque(self, key: impl Into<String>, value: Value) -> Self {
        self.with_entry(key, SchemaEntry::Opaque(value))
    }

    fn with_entry(mut self, key: impl Into<String>, entry: SchemaEntry) -> Self {
        self.schema.insert(key, entry);
        self
    }

    /// Finish building.
    pub fn build(self) -> Schema {
        self.schema
    }
}

/// Build a [`Schema`] from `key => transform` pairs.
///
/// ```rust
/// use r_assign::{transform_schema, transform_assign};
/// use serde_json::{Value, json};
///
/// let schema = transform_schema! {
///     "name" => |value, _, _| value.and_then(Value::as_str).map(|s| json!(s.to_uppercase())),
///     "missing" => |_, _, _| None,
/// };
/// let result = transform_assign(&schema, [&json!({"name": "al"})])?;
/// assert_eq!(Value::Object(result), json!({"name": "AL"}));
/// # Ok::<_, std::sync::Arc<r_assign::AssignError>>(())
/// ```
#[macro_export]
macro_rules! transform_schema {
    ($($key:expr => $transform:expr),* $(,)?) => {
        $crate::Schema::builder()
            $(.transform($key, $transform))*
            .build()
    };
}
