//! Error types produced by the transform-assign operation.

use std::error::Error as StdError;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::source::value_kind;

/// Errors that can occur while applying a transform schema.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssignError {
    /// The schema argument was not a key-value mapping.
    #[error("invalid schema argument type, object expected (found {found})")]
    InvalidSchema {
        /// Kind of value supplied in place of the schema.
        found: &'static str,
    },

    /// A schema key maps to something that cannot be invoked.
    #[error("invalid property type, \"{key}\" property expected to be a transform")]
    InvalidTransform {
        /// Schema key holding the non-invocable value.
        key: String,
    },

    /// The assigned result could not be deserialised into the requested type.
    #[error("failed to deserialise transform result: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// Error originating from a schema or source document.
    #[error("document error in '{path}': {source}")]
    File {
        /// Path of the document that failed to load.
        path: PathBuf,
        /// Underlying I/O or parse error.
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

/// Result type used throughout the crate.
///
/// Errors are shared behind an [`Arc`] so callers may clone failures into
/// logs or aggregate reports without giving up ownership.
pub type AssignResult<T> = Result<T, Arc<AssignError>>;

impl AssignError {
    /// Build an [`AssignError::InvalidSchema`] describing `schema`.
    #[must_use]
    pub fn invalid_schema(schema: &Value) -> Arc<Self> {
        Arc::new(Self::InvalidSchema {
            found: value_kind(schema),
        })
    }

    /// Build an [`AssignError::InvalidTransform`] for `key`.
    #[must_use]
    pub fn invalid_transform(key: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::InvalidTransform { key: key.into() })
    }

    /// Build an [`AssignError::File`] for a document path.
    #[must_use]
    pub fn file(path: &Path, err: impl Into<Box<dyn StdError + Send + Sync>>) -> Arc<Self> {
        Arc::new(Self::File {
            path: path.to_path_buf(),
            source: err.into(),
        })
    }

    /// Returns the offending schema key for [`AssignError::InvalidTransform`].
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::InvalidTransform { key } => Some(key.as_str()),
            _ => None,
        }
    }
}
