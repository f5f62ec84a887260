//! Loose scalar coercions usable directly as schema transforms.
//!
//! Each transform has the `(value, key, source)` shape expected by
//! `r_assign`, so the functions can be passed to a schema builder as-is.
//!
//! # Examples
//!
//! ```
//! use serde_json::{Map, json};
//! use test_helpers::coerce;
//!
//! let source = Map::new();
//! assert_eq!(coerce::number(Some(&json!("30")), "age", &source), Some(json!(30)));
//! assert_eq!(coerce::string(Some(&json!(30)), "age", &source), Some(json!("30")));
//! ```

use serde_json::{Map, Number, Value};

/// Render `value` as text, treating a missing value as `"undefined"`.
#[must_use]
pub fn to_text(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_owned(),
        Some(Value::Null) => "null".to_owned(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_text(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_owned(),
        Some(Value::Number(number)) => number_text(number),
        Some(Value::Bool(flag)) => flag.to_string(),
    }
}

/// Integral floats render without a fraction, so `1.0` becomes `"1"`.
fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() => float.to_string(),
        _ => number.to_string(),
    }
}

/// Convert `value` to a JSON number, yielding `null` when it is not numeric.
#[must_use]
pub fn to_number(value: Option<&Value>) -> Value {
    match value {
        Some(Value::Number(number)) => Value::Number(number.clone()),
        Some(Value::Bool(flag)) => Value::from(u8::from(*flag)),
        Some(Value::Null) => Value::from(0),
        Some(Value::String(text)) => parse_number(text.trim()),
        None | Some(Value::Array(_) | Value::Object(_)) => Value::Null,
    }
}

fn parse_number(text: &str) -> Value {
    if text.is_empty() {
        return Value::from(0);
    }
    if let Ok(integer) = text.parse::<i64>() {
        return Value::from(integer);
    }
    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map_or(Value::Null, Value::Number)
}

/// Transform coercing the merged value to a string.
#[must_use]
pub fn string(value: Option<&Value>, _key: &str, _source: &Map<String, Value>) -> Option<Value> {
    Some(Value::String(to_text(value)))
}

/// Transform coercing the merged value to a number.
#[must_use]
pub fn number(value: Option<&Value>, _key: &str, _source: &Map<String, Value>) -> Option<Value> {
    Some(to_number(value))
}

/// Transform passing the merged value through unchanged.
#[must_use]
pub fn identity(value: Option<&Value>, _key: &str, _source: &Map<String, Value>) -> Option<Value> {
    value.cloned()
}

/// Transform that always elides its key.
#[must_use]
pub const fn omit(_value: Option<&Value>, _key: &str, _source: &Map<String, Value>) -> Option<Value> {
    None
}
