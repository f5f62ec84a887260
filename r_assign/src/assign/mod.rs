//! The transform-assign operation.
//!
//! Sources are merged shallowly, then every schema key's transform is invoked
//! with `(merged value, key, merged source)`. Results land in a fresh map;
//! keys whose transform yields `None` are left out entirely.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use crate::{
    AssignError, AssignResult, AssignResultExt, Schema, Source, TransformRegistry, merge_sources,
};

/// Merge `sources` and assign each schema key from its transform.
///
/// Transforms run exactly once each, in schema order. The result holds only
/// schema keys, minus those whose transform returned `None`. Sources are
/// never mutated.
///
/// # Errors
///
/// Returns [`AssignError::InvalidTransform`] as soon as iteration reaches a
/// key whose entry is not invocable. No partial result is returned.
///
/// # Examples
///
/// ```rust
/// use r_assign::{transform_schema, transform_assign};
/// use serde_json::{Value, json};
///
/// let schema = transform_schema! {
///     "total" => |_, _, src| {
///         let field = |name: &str| src.get(name).and_then(Value::as_i64).unwrap_or(0);
///         Some(json!(field("a") + field("b")))
///     },
/// };
/// let result = transform_assign(&schema, [&json!({"a": 1, "b": 2})])?;
/// assert_eq!(Value::Object(result), json!({"total": 3}));
/// # Ok::<_, std::sync::Arc<r_assign::AssignError>>(())
/// ```
pub fn transform_assign<'a, I>(schema: &Schema, sources: I) -> AssignResult<Source>
where
    I: IntoIterator<Item = &'a Value>,
{
    let source = merge_sources(sources);
    debug!(
        schema_keys = schema.len(),
        source_keys = source.len(),
        "applying transform schema"
    );

    let mut result = Source::new();
    for (key, entry) in schema {
        let transform = entry
            .as_transform()
            .ok_or_else(|| AssignError::invalid_transform(key.as_str()))?;
        match transform.apply(source.get(key), key, &source) {
            Some(value) => {
                result.insert(key.clone(), value);
            }
            None => trace!(key = key.as_str(), "transform returned no value; key elided"),
        }
    }
    Ok(result)
}

/// Apply a schema decoded from untyped input.
///
/// `schema` must be a JSON object, or an array keyed by index, whose entries
/// name transforms in `registry`; see [`Schema::from_value`].
///
/// # Errors
///
/// Returns [`AssignError::InvalidSchema`] when `schema` is null or a scalar,
/// and [`AssignError::InvalidTransform`] when an entry does not resolve to a
/// registered transform.
///
/// # Examples
///
/// ```rust
/// use r_assign::{AssignError, TransformRegistry, transform_assign_value};
/// use serde_json::{Value, json};
///
/// let registry = TransformRegistry::new();
/// let err = transform_assign_value(&Value::Null, &registry, [&json!({})]).unwrap_err();
/// assert!(matches!(*err, AssignError::InvalidSchema { .. }));
/// ```
pub fn transform_assign_value<'a, I>(
    schema: &Value,
    registry: &TransformRegistry,
    sources: I,
) -> AssignResult<Source>
where
    I: IntoIterator<Item = &'a Value>,
{
    let schema = Schema::from_value(schema, registry)?;
    transform_assign(&schema, sources)
}

/// Apply `schema` and deserialise the result into `T`.
///
/// # Errors
///
/// Returns any error from [`transform_assign`], or
/// [`AssignError::Deserialize`] when the result does not fit `T`.
///
/// # Examples
///
/// ```rust
/// use r_assign::{transform_schema, transform_assign_into};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct User {
///     id: u64,
/// }
///
/// let schema = transform_schema! { "id" => |v, _, _| v.cloned() };
/// let user: User = transform_assign_into(&schema, [&json!({"id": 1}), &json!({"id": 2})])?;
/// assert_eq!(user, User { id: 2 });
/// # Ok::<_, std::sync::Arc<r_assign::AssignError>>(())
/// ```
pub fn transform_assign_into<'a, T, I>(schema: &Schema, sources: I) -> AssignResult<T>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = &'a Value>,
{
    let result = transform_assign(schema, sources)?;
    serde_json::from_value(Value::Object(result)).into_assign()
}
