//! Steps driving the transform-assign scenarios.

use crate::fixtures::{AssignContext, registry};
use anyhow::{Context, Result, anyhow, ensure};
use r_assign::{AssignError, transform_assign_value};
use rstest_bdd_macros::{given, then, when};
use serde_json::Value;
use test_helpers::text::{normalize_scalar, unquote};

fn parse_json(raw: &str) -> Result<Value> {
    serde_json::from_str(unquote(raw)).with_context(|| format!("invalid JSON in step: {raw}"))
}

#[given("a schema of {schema}")]
fn given_schema(assign_context: &AssignContext, schema: String) -> Result<()> {
    assign_context.schema.set(parse_json(&schema)?);
    Ok(())
}

#[given("a source of {source}")]
fn given_source(assign_context: &AssignContext, source: String) -> Result<()> {
    let mut sources = assign_context.sources.take().unwrap_or_default();
    sources.push(parse_json(&source)?);
    assign_context.sources.set(sources);
    Ok(())
}

#[when("the schema is applied")]
fn apply_schema(assign_context: &AssignContext) -> Result<()> {
    let schema = assign_context
        .schema
        .take()
        .ok_or_else(|| anyhow!("schema missing"))?;
    let sources = assign_context.sources.take().unwrap_or_default();
    let result = transform_assign_value(&schema, &registry(), &sources);
    assign_context.result.set(result);
    Ok(())
}

#[then("the result is {expected}")]
fn result_is(assign_context: &AssignContext, expected: String) -> Result<()> {
    let result = assign_context
        .result
        .take()
        .ok_or_else(|| anyhow!("result missing"))?
        .map_err(|err| anyhow!(err))?;
    let expected_value = parse_json(&expected)?;
    ensure!(
        Value::Object(result.clone()) == expected_value,
        "unexpected result {result:?}; expected {expected_value}"
    );
    Ok(())
}

#[then("the call fails because an object was expected")]
fn fails_with_invalid_schema(assign_context: &AssignContext) -> Result<()> {
    let err = take_error(assign_context)?;
    ensure!(
        matches!(err.as_ref(), AssignError::InvalidSchema { .. }),
        "unexpected error variant: {err:?}"
    );
    ensure!(err.to_string().contains("object expected"));
    Ok(())
}

#[then("the call fails naming the key {key}")]
fn fails_with_invalid_transform(assign_context: &AssignContext, key: String) -> Result<()> {
    let expected_key = normalize_scalar(&key);
    let err = take_error(assign_context)?;
    ensure!(
        err.key() == Some(expected_key.as_str()),
        "unexpected error: {err:?}"
    );
    ensure!(err.to_string().contains(&format!("\"{expected_key}\"")));
    Ok(())
}

fn take_error(assign_context: &AssignContext) -> Result<std::sync::Arc<AssignError>> {
    assign_context
        .result
        .take()
        .ok_or_else(|| anyhow!("result missing"))?
        .err()
        .ok_or_else(|| anyhow!("expected the call to fail"))
}
