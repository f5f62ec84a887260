//! Schema-driven transform and assign for JSON-shaped data.
//!
//! Given a [`Schema`] mapping each output key to a [`Transform`], and any
//! number of source values, [`transform_assign`] merges the sources shallowly
//! (later sources win) and builds a fresh map whose keys are exactly the
//! schema's keys. Each transform receives the merged value for its key, the
//! key, and the whole merged source. Keys whose transform returns `None` are
//! left out of the result.
//!
//! ```rust
//! use r_assign::{transform_schema, transform_assign};
//! use serde_json::{Value, json};
//!
//! let schema = transform_schema! {
//!     "name" => |value, _, _| value.map(|v| match v {
//!         Value::String(s) => json!(s),
//!         other => json!(other.to_string()),
//!     }),
//!     "age" => |value, _, _| value
//!         .and_then(Value::as_str)
//!         .and_then(|s| s.parse::<u32>().ok())
//!         .map(|n| json!(n)),
//! };
//! let result = transform_assign(&schema, [&json!({"name": "Al", "age": "30"})])?;
//! assert_eq!(Value::Object(result), json!({"name": "Al", "age": 30}));
//! # Ok::<_, std::sync::Arc<r_assign::AssignError>>(())
//! ```
//!
//! Schemas read from untyped input go through [`TransformRegistry`] and
//! [`transform_assign_value`], which restore the runtime checks that the type
//! system otherwise provides.

mod assign;
mod document;
mod error;
mod registry;
mod result_ext;
mod schema;
mod source;
mod transform;

pub use assign::{transform_assign, transform_assign_into, transform_assign_value};
pub use document::{load_document, load_schema_file, load_source_file, parse_document};
pub use error::{AssignError, AssignResult};
pub use registry::TransformRegistry;
pub use result_ext::AssignResultExt;
pub use schema::{Schema, SchemaBuilder, SchemaEntry};
pub use source::{Source, merge_sources};
pub use transform::{SharedTransform, Transform};

pub use serde_json;
