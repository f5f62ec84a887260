//! Shared fixtures for the behavioural scenarios.

use r_assign::{AssignResult, Source, TransformRegistry};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::Value;
use test_helpers::coerce;

/// Scenario state shared between steps.
#[derive(Debug, Default, ScenarioState)]
pub struct AssignContext {
    /// Untyped schema supplied by the scenario.
    pub schema: Slot<Value>,
    /// Sources in the order the scenario listed them.
    pub sources: Slot<Vec<Value>>,
    /// Outcome of applying the schema.
    pub result: Slot<AssignResult<Source>>,
}

/// Creates a clean context for each scenario.
#[fixture]
pub fn assign_context() -> AssignContext {
    AssignContext::default()
}

/// Transforms available to scenario schemas by name.
pub fn registry() -> TransformRegistry {
    TransformRegistry::new()
        .with("string", coerce::string)
        .with("number", coerce::number)
        .with("identity", coerce::identity)
        .with("omit", coerce::omit)
        .with("a_plus_b", |_, _, source| {
            let field = |name: &str| source.get(name).and_then(Value::as_i64).unwrap_or(0);
            Some(Value::from(field("a") + field("b")))
        })
}
