//! The callable contract invoked for every schema key.

use std::sync::Arc;

use serde_json::Value;

use crate::Source;

/// A per-key transform.
///
/// Transforms receive the merged value for their key (`None` when no source
/// supplied it), the key itself, and the whole merged source so they can
/// derive values from sibling fields. Returning `None` elides the key from
/// the result; returning `Some(Value::Null)` keeps it with a null value.
///
/// Any closure with the matching signature is a transform:
///
/// ```rust
/// use r_assign::{Source, Transform};
/// use serde_json::{Value, json};
///
/// let double = |value: Option<&Value>, _key: &str, _source: &Source| {
///     value.and_then(Value::as_i64).map(|n| json!(n * 2))
/// };
/// assert_eq!(double.apply(Some(&json!(21)), "n", &Source::new()), Some(json!(42)));
/// ```
pub trait Transform: Send + Sync {
    /// Compute the output value for `key`.
    fn apply(&self, value: Option<&Value>, key: &str, source: &Source) -> Option<Value>;
}

impl<F> Transform for F
where
    F: Fn(Option<&Value>, &str, &Source) -> Option<Value> + Send + Sync,
{
    fn apply(&self, value: Option<&Value>, key: &str, source: &Source) -> Option<Value> {
        self(value, key, source)
    }
}

/// Reference-counted transform shared between schemas and registries.
pub type SharedTransform = Arc<dyn Transform>;
