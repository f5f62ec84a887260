//! Individual schema entries.

use std::fmt;

use serde_json::Value;

use crate::{SharedTransform, Transform};

/// Value stored against a schema key.
///
/// Schemas built in code hold transforms. Schemas decoded from untyped input
/// may also hold arbitrary values; those are carried as [`SchemaEntry::Opaque`]
/// and rejected with [`crate::AssignError::InvalidTransform`] when applied.
#[derive(Clone)]
#[non_exhaustive]
pub enum SchemaEntry {
    /// An invocable transform.
    Transform(SharedTransform),
    /// A non-invocable value.
    Opaque(Value),
}

impl SchemaEntry {
    /// Returns the transform when the entry is invocable.
    #[must_use]
    pub fn as_transform(&self) -> Option<&dyn Transform> {
        match self {
            Self::Transform(transform) => Some(&**transform),
            Self::Opaque(_) => None,
        }
    }

    /// Returns `true` for [`SchemaEntry::Transform`].
    #[must_use]
    pub const fn is_invocable(&self) -> bool {
        matches!(self, Self::Transform(_))
    }
}

impl From<SharedTransform> for SchemaEntry {
    fn from(transform: SharedTransform) -> Self {
        Self::Transform(transform)
    }
}

impl From<Value> for SchemaEntry {
    fn from(value: Value) -> Self {
        Self::Opaque(value)
    }
}

impl fmt::Debug for SchemaEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transform(_) => f.write_str("Transform(..)"),
            Self::Opaque(value) => f.debug_tuple("Opaque").field(value).finish(),
        }
    }
}
