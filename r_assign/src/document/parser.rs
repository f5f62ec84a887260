//! Format-specific parsing for schema and source documents.

use std::path::Path;

use serde_json::Value;

use crate::{AssignError, AssignResult};

/// Parse document text according to the extension of `path`.
///
/// `.json` files are parsed as JSON; everything else is parsed as TOML,
/// which requires the `toml` feature (enabled by default).
///
/// # Errors
///
/// Returns [`AssignError::File`] if the contents fail to parse or if the
/// required feature is disabled.
///
/// # Examples
///
/// ```rust
/// use r_assign::parse_document;
/// use serde_json::json;
/// use std::path::Path;
///
/// let value = parse_document(Path::new("source.json"), r#"{"a": 1}"#)?;
/// assert_eq!(value, json!({"a": 1}));
/// # Ok::<_, std::sync::Arc<r_assign::AssignError>>(())
/// ```
pub fn parse_document(path: &Path, data: &str) -> AssignResult<Value> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => serde_json::from_str(data).map_err(|e| AssignError::file(path, e)),
        _ => parse_toml(path, data),
    }
}

#[cfg(feature = "toml")]
fn parse_toml(path: &Path, data: &str) -> AssignResult<Value> {
    toml::from_str::<Value>(data).map_err(|e| AssignError::file(path, e))
}

#[cfg(not(feature = "toml"))]
fn parse_toml(path: &Path, _data: &str) -> AssignResult<Value> {
    Err(AssignError::file(
        path,
        std::io::Error::other(
            "toml feature disabled: enable the 'toml' feature to support this file format",
        ),
    ))
}
