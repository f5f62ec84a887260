//! Named transforms for schemas decoded from untyped input.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::{SharedTransform, Source, Transform};

/// Lookup table resolving transform names used in declarative schemas.
///
/// A schema decoded from JSON or TOML cannot carry functions, so each entry
/// names a transform instead. Names that resolve here become invocable;
/// anything else stays opaque and is rejected when the schema is applied.
///
/// ```rust
/// use r_assign::TransformRegistry;
///
/// let registry = TransformRegistry::new()
///     .with("identity", |value, _, _| value.cloned());
/// assert!(registry.contains("identity"));
/// ```
#[derive(Clone, Default)]
pub struct TransformRegistry {
    transforms: BTreeMap<String, SharedTransform>,
}

impl TransformRegistry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            transforms: BTreeMap::new(),
        }
    }

    /// Register a closure under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, transform: F) -> &mut Self
    where
        F: Fn(Option<&Value>, &str, &Source) -> Option<Value> + Send + Sync + 'static,
    {
        self.register_shared(name, Arc::new(transform))
    }

    /// Register an already shared transform under `name`.
    pub fn register_shared(
        &mut self,
        name: impl Into<String>,
        transform: SharedTransform,
    ) -> &mut Self {
        self.transforms.insert(name.into(), transform);
        self
    }

    /// Register a value implementing [`Transform`] under `name`.
    pub fn register_transform<T>(&mut self, name: impl Into<String>, transform: T) -> &mut Self
    where
        T: Transform + 'static,
    {
        self.register_shared(name, Arc::new(transform))
    }

    /// Builder-style variant of [`TransformRegistry::register`].
    #[must_use]
    pub fn with<F>(mut self, name: impl Into<String>, transform: F) -> Self
    where
        F: Fn(Option<&Value>, &str, &Source) -> Option<Value> + Send + Sync + 'static,
    {
        self.register(name, transform);
        self
    }

    /// Returns the transform registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SharedTransform> {
        self.transforms.get(name)
    }

    /// Returns `true` when `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.transforms.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.transforms.keys().map(String::as_str)
    }

    /// Number of registered transforms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformRegistry")
            .field("names", &self.transforms.keys().collect::<Vec<_>>())
            .finish()
    }
}
