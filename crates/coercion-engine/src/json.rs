//! `serde_json` interop.
//!
//! Records usually arrive as JSON. Converting them into [`Value`] keeps object
//! key order (serde_json is built with `preserve_order`) and maps JSON numbers
//! to `f64`. Serializing goes the other way with `JSON.stringify` semantics:
//! kinds JSON cannot express are dropped from objects and written as `null`
//! inside arrays.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::Result;
use crate::object::Object;
use crate::value::Value;

impl Value {
    /// Parse a JSON document into a `Value`.
    ///
    /// ```
    /// use coercion_engine::{to_number, Value};
    ///
    /// let record = Value::from_json_str(r#"{"price":"12.50"}"#).unwrap();
    /// let price = record.as_object().unwrap().get("price").unwrap();
    /// assert_eq!(to_number(price).unwrap(), 12.5);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Value> {
        let parsed: serde_json::Value = serde_json::from_str(json)?;
        Ok(Value::from(parsed))
    }

    /// Serialize to a compact JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(Object::from_entries(
                map.into_iter().map(|(k, v)| (k, Value::from(v))),
            )),
        }
    }
}

/// Kinds with no JSON representation.
fn is_unrepresentable(value: &Value) -> bool {
    matches!(
        value,
        Value::Undefined | Value::Symbol(_) | Value::Function(_)
    )
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null | Value::Symbol(_) | Value::Function(_) => {
                serializer.serialize_unit()
            }
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serialize_number(*n, serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(object) => {
                let kept: Vec<_> = object
                    .entries()
                    .iter()
                    .filter(|(_, v)| !is_unrepresentable(v))
                    .collect();
                let mut map = serializer.serialize_map(Some(kept.len()))?;
                for (key, value) in kept {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

/// Non-finite numbers become `null`; integral values within the i64 range are
/// written without a fractional part (`42`, not `42.0`).
fn serialize_number<S: Serializer>(n: f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if !n.is_finite() {
        return serializer.serialize_unit();
    }
    if n.fract() == 0.0 && n.abs() < (i64::MAX as f64) {
        return serializer.serialize_i64(n as i64);
    }
    serializer.serialize_f64(n)
}
