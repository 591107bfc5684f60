use std::str::FromStr;

use serde_json::Value as SerdeValue;

use crate::{value::number::MAX_SAFE_INTEGER, Value};

impl From<SerdeValue> for Value {
    fn from(value: SerdeValue) -> Self {
        match value {
            SerdeValue::Null => Value::Null,
            SerdeValue::Bool(b) => Value::Boolean(b),
            // NOTE: Without `arbitrary_precision` every `serde_json` number has an `f64` form
            SerdeValue::Number(num) => Value::Number(num.as_f64().unwrap_or_default()),
            SerdeValue::String(s) => Value::String(s),
            SerdeValue::Array(old) => Value::Array(old.into_iter().map(Value::from).collect()),
            SerdeValue::Object(old) => Value::Object(
                old.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for SerdeValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => SerdeValue::Null,
            Value::Boolean(b) => SerdeValue::Bool(b),
            Value::Number(n) => serde_json::Number::from_f64(n).map_or(SerdeValue::Null, |num| {
                // Keep integral numbers integral in the `serde_json` representation
                if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
                    #[allow(clippy::cast_possible_truncation)]
                    let integer = n as i64;
                    SerdeValue::from(integer)
                } else {
                    SerdeValue::Number(num)
                }
            }),
            Value::String(s) => SerdeValue::String(s),
            Value::Array(old) => SerdeValue::Array(old.into_iter().map(SerdeValue::from).collect()),
            Value::Object(old) => SerdeValue::Object(
                old.into_iter()
                    .map(|(k, v)| (k, SerdeValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl PartialEq<SerdeValue> for Value {
    fn eq(&self, other: &SerdeValue) -> bool {
        eq(other, self)
    }
}

impl PartialEq<Value> for SerdeValue {
    fn eq(&self, other: &Value) -> bool {
        eq(self, other)
    }
}

#[allow(clippy::float_cmp)]
fn eq(lhs: &SerdeValue, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (SerdeValue::Null, Value::Null) => true,
        (SerdeValue::Bool(l), Value::Boolean(r)) => l == r,
        (SerdeValue::Number(l), Value::Number(r)) => l.as_f64().is_some_and(|l| l == *r),
        (SerdeValue::String(l), Value::String(r)) => l == r,
        (SerdeValue::Array(l), Value::Array(r)) => {
            if l.len() != r.len() {
                return false;
            }
            for (l, r) in l.iter().zip(r.iter()) {
                if !eq(l, r) {
                    return false;
                }
            }
            true
        }
        (SerdeValue::Object(l), Value::Object(r)) => {
            if l.len() != r.len() {
                return false;
            }
            for (key, lv) in l {
                match r.get(key) {
                    Some(rv) if eq(lv, rv) => {}
                    _ => return false,
                }
            }
            true
        }
        _ => false,
    }
}

/// Parse JSON text into a [`Value`].
///
/// # Errors
///
/// If `input` is not valid JSON.
pub fn from_str(input: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str::<SerdeValue>(input).map(Value::from)
}

impl FromStr for Value {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str(s)
    }
}
