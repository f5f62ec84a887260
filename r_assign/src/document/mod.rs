//! Loading schema and source documents from disk.
//!
//! A schema document is a table whose values name transforms in a
//! [`TransformRegistry`](crate::TransformRegistry):
//!
//! ```toml
//! name = "string"
//! age = "number"
//! ```
//!
//! Source documents are plain data and are merged like any other source.

mod parser;

pub use parser::parse_document;

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::{AssignError, AssignResult, Schema, TransformRegistry};

/// Read and parse a document, choosing the format from the file extension.
///
/// # Errors
///
/// Returns [`AssignError::File`] when the file cannot be read or parsed.
pub fn load_document(path: &Path) -> AssignResult<Value> {
    let data = std::fs::read_to_string(path).map_err(|e| AssignError::file(path, e))?;
    let value = parse_document(path, &data)?;
    debug!(path = %path.display(), "loaded document");
    Ok(value)
}

/// Load a source document.
///
/// Any document shape is accepted; non-object sources contribute keys the
/// same way [`merge_sources`](crate::merge_sources) treats them.
///
/// # Errors
///
/// Returns [`AssignError::File`] when the file cannot be read or parsed.
pub fn load_source_file(path: &Path) -> AssignResult<Value> {
    load_document(path)
}

/// Load a schema document and resolve its transform names.
///
/// # Errors
///
/// Returns [`AssignError::File`] when the file cannot be read or parsed and
/// [`AssignError::InvalidSchema`] when the document is a scalar.
///
/// # Examples
///
/// ```rust,no_run
/// use r_assign::{TransformRegistry, load_schema_file, transform_assign};
/// use serde_json::json;
/// use std::path::Path;
///
/// let registry = TransformRegistry::new().with("identity", |v, _, _| v.cloned());
/// let schema = load_schema_file(Path::new("schema.toml"), &registry)?;
/// let _result = transform_assign(&schema, [&json!({"id": 1})])?;
/// # Ok::<_, std::sync::Arc<r_assign::AssignError>>(())
/// ```
pub fn load_schema_file(path: &Path, registry: &TransformRegistry) -> AssignResult<Schema> {
    let document = load_document(path)?;
    let schema = Schema::from_value(&document, registry)?;
    debug!(
        path = %path.display(),
        keys = schema.len(),
        "resolved schema document"
    );
    Ok(schema)
}
