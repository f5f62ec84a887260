//! Unit tests for schema construction and decoding.

use std::sync::Arc;

use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::{Schema, SchemaEntry};
use crate::{AssignError, Source, Transform, TransformRegistry};

struct Echo;

impl Transform for Echo {
    fn apply(&self, value: Option<&Value>, _: &str, _: &Source) -> Option<Value> {
        value.cloned()
    }
}

#[fixture]
fn registry() -> TransformRegistry {
    TransformRegistry::new()
        .with("identity", |v, _, _| v.cloned())
        .with("drop", |_, _, _| None)
}

#[test]
fn builder_preserves_insertion_order() {
    let schema = Schema::builder()
        .transform("zeta", |_, _, _| None)
        .entry("alpha", Echo)
        .opaque("mid", json!(5))
        .build();
    assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    assert_eq!(schema.len(), 3);
}

#[test]
fn reinserting_replaces_in_place() {
    let mut schema = Schema::builder()
        .opaque("a", json!(1))
        .entry("b", Echo)
        .build();
    let previous = schema.insert("a", Arc::new(Echo) as Arc<dyn Transform>);
    assert!(matches!(previous, Some(SchemaEntry::Opaque(_))));
    assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert!(schema.get("a").is_some_and(SchemaEntry::is_invocable));
}

#[test]
fn empty_schema_reports_empty() {
    let schema = Schema::new();
    assert!(schema.is_empty());
    assert!(!schema.contains_key("anything"));
}

#[test]
fn collects_from_pairs() {
    let schema: Schema = [("a", json!(1)), ("b", json!("two"))].into_iter().collect();
    assert!(schema.iter().all(|(_, entry)| !entry.is_invocable()));
}

#[rstest]
fn decodes_registered_names(registry: TransformRegistry) {
    let schema = Schema::from_value(&json!({"id": "identity", "gone": "drop"}), &registry)
        .expect("object schema decodes");
    assert!(schema.iter().all(|(_, entry)| entry.is_invocable()));
}

#[rstest]
#[case::number(json!({"x": 5}))]
#[case::unknown_name(json!({"x": "nope"}))]
#[case::nested(json!({"x": {"identity": true}}))]
fn keeps_unresolved_entries_opaque(registry: TransformRegistry, #[case] raw: Value) {
    let schema = Schema::from_value(&raw, &registry).expect("object schema decodes");
    let entry = schema.get("x").expect("x present");
    assert!(entry.as_transform().is_none());
    assert!(format!("{entry:?}").starts_with("Opaque("));
}

#[rstest]
#[case::null(Value::Null, "null")]
#[case::string(json!("identity"), "string")]
#[case::number(json!(7), "number")]
#[case::boolean(json!(true), "boolean")]
fn rejects_non_object_schemas(
    registry: TransformRegistry,
    #[case] raw: Value,
    #[case] found: &str,
) {
    let err = Schema::from_value(&raw, &registry).expect_err("non-object schema rejected");
    assert!(
        matches!(err.as_ref(), AssignError::InvalidSchema { found: f } if *f == found),
        "unexpected error: {err:?}"
    );
}

#[rstest]
fn decodes_arrays_by_index(registry: TransformRegistry) {
    let schema = Schema::from_value(&json!(["identity", 5, "drop"]), &registry)
        .expect("array schema decodes");
    assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["0", "1", "2"]);
    assert!(schema.get("0").is_some_and(SchemaEntry::is_invocable));
    assert!(schema.get("1").is_some_and(|entry| !entry.is_invocable()));
    assert!(schema.get("2").is_some_and(SchemaEntry::is_invocable));
}

#[test]
fn debug_hides_transform_bodies() {
    let schema = Schema::builder()
        .entry("a", Echo)
        .opaque("b", json!("x"))
        .build();
    assert_eq!(
        format!("{schema:?}"),
        r#"{"a": Transform(..), "b": Opaque(String("x"))}"#
    );
}
