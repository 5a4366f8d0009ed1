//! Conversions from decoded serde documents
//!
//! JSON and YAML numbers carry no width information, so integers become
//! `Int64` when they fit, `UInt64` otherwise, and everything else `Float64`.

use super::types::{Mapping, Value};
use crate::error::{Error, Result};

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => json_number(&n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Sequence(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => Value::Map(
                obj.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

fn json_number(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Int64(i)
    } else if let Some(u) = n.as_u64() {
        Value::UInt64(u)
    } else {
        // Finite JSON numbers always fit in f64
        Value::Float64(n.as_f64().unwrap_or(f64::NAN))
    }
}

impl TryFrom<serde_yaml::Value> for Value {
    type Error = Error;

    fn try_from(value: serde_yaml::Value) -> Result<Self> {
        Ok(match value {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Bool(b),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int64(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt64(u)
                } else {
                    Value::Float64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_yaml::Value::String(s) => Value::String(s),
            serde_yaml::Value::Sequence(seq) => Value::Sequence(
                seq.into_iter()
                    .map(Value::try_from)
                    .collect::<Result<Vec<_>>>()?,
            ),
            serde_yaml::Value::Mapping(map) => {
                let mut out = Mapping::with_capacity(map.len());
                for (k, v) in map {
                    let key = yaml_key(k)?;
                    if out.contains_key(&key) {
                        return Err(Error::decode(format!("duplicate mapping key '{key}'")));
                    }
                    out.insert(key, Value::try_from(v)?);
                }
                Value::Map(out)
            }
            serde_yaml::Value::Tagged(tagged) => Value::try_from(tagged.value)?,
        })
    }
}

/// Mapping keys must be strings; `1:` and `"1":` are different YAML keys.
fn yaml_key(key: serde_yaml::Value) -> Result<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        other => Err(Error::decode(format!(
            "mapping keys must be strings, found {other:?}"
        ))),
    }
}

/// Parse a JSON document into a dynamic value
pub fn from_json_str(input: &str) -> Result<Value> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    Ok(Value::from(value))
}

/// Parse a YAML document into a dynamic value
pub fn from_yaml_str(input: &str) -> Result<Value> {
    let value: serde_yaml::Value = serde_yaml::from_str(input)?;
    Value::try_from(value)
}
