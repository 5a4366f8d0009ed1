//! Scalar value to Arrow primitive resolution

use crate::value::Value;
use arrow::datatypes::DataType;

/// Arrow primitive for a scalar value.
///
/// Each runtime width maps to the same Arrow width; nothing is widened.
/// Platform-native integers map to their 64-bit forms. Returns `None` for
/// null, composite values and scalar kinds Arrow cannot represent.
pub fn scalar_type_of(value: &Value) -> Option<DataType> {
    let dt = match value {
        Value::Bool(_) => DataType::Boolean,
        Value::Int8(_) => DataType::Int8,
        Value::Int16(_) => DataType::Int16,
        Value::Int32(_) => DataType::Int32,
        Value::Int64(_) | Value::Isize(_) => DataType::Int64,
        Value::UInt8(_) => DataType::UInt8,
        Value::UInt16(_) => DataType::UInt16,
        Value::UInt32(_) => DataType::UInt32,
        Value::UInt64(_) | Value::Usize(_) => DataType::UInt64,
        Value::Float32(_) => DataType::Float32,
        Value::Float64(_) => DataType::Float64,
        Value::String(_) => DataType::Utf8,
        Value::Bytes(_) => DataType::Binary,
        Value::Null
        | Value::Complex64 { .. }
        | Value::Complex128 { .. }
        | Value::Sequence(_)
        | Value::Map(_) => return None,
    };
    Some(dt)
}
