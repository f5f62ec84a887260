//! Test helpers shared across crates in the workspace.
//!
//! The crate provides coercion transforms mirroring the conversions callers
//! commonly plug into schemas, temporary document directories, and text
//! normalisation for behavioural step parameters.

pub mod coerce;
pub mod documents;
pub mod text;
