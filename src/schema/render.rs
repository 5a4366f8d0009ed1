//! Textual and JSON renderings of inferred schemas

use arrow::datatypes::{DataType, Field, Schema};
use serde_json::{json, Value};
use std::fmt::Write;

/// Render a schema as an indented field listing
///
/// Struct members, including those of list elements, are listed below
/// their parent one level deeper.
///
/// ```text
/// schema:
///   fields: 2
///     - count: type=int64, nullable
///     - results: type=list<item: struct, nullable>, nullable
///         - id: type=int64, nullable
/// ```
pub fn render_text(schema: &Schema) -> String {
    let mut out = String::from("schema:\n");
    let _ = writeln!(out, "  fields: {}", schema.fields().len());
    for field in schema.fields() {
        write_field(&mut out, field, 4);
    }
    out
}

fn write_field(out: &mut String, field: &Field, indent: usize) {
    let _ = writeln!(
        out,
        "{:indent$}- {}: type={}{}",
        "",
        field.name(),
        outline_name(field.data_type()),
        nullable_suffix(field),
    );
    for member in members(field.data_type()) {
        write_field(out, member, indent + 4);
    }
}

/// Like [`type_name`], but structs are named without their members
fn outline_name(data_type: &DataType) -> String {
    match data_type {
        DataType::Struct(_) => "struct".to_string(),
        DataType::List(item) | DataType::LargeList(item) => format!(
            "list<{}: {}{}>",
            item.name(),
            outline_name(item.data_type()),
            nullable_suffix(item)
        ),
        other => type_name(other),
    }
}

/// Struct members of a type, looking through list elements
fn members(data_type: &DataType) -> Vec<&Field> {
    match data_type {
        DataType::Struct(fields) => fields.iter().map(|f| f.as_ref()).collect(),
        DataType::List(item) | DataType::LargeList(item) => members(item.data_type()),
        _ => Vec::new(),
    }
}

/// Render a schema as a JSON document of nested field descriptors
pub fn render_json(schema: &Schema) -> Value {
    let fields: Vec<Value> = schema.fields().iter().map(|f| field_json(f)).collect();
    json!({ "fields": fields })
}

fn field_json(field: &Field) -> Value {
    let mut obj = json!({
        "name": field.name(),
        "type": type_name(field.data_type()),
        "nullable": field.is_nullable(),
    });

    let children: Vec<Value> = match field.data_type() {
        DataType::Struct(fields) => fields.iter().map(|f| field_json(f)).collect(),
        DataType::List(item) | DataType::LargeList(item) => vec![field_json(item)],
        _ => Vec::new(),
    };
    if !children.is_empty() {
        obj["children"] = Value::Array(children);
    }
    obj
}

/// Short lowercase name of an Arrow type, recursing into composites
pub fn type_name(data_type: &DataType) -> String {
    match data_type {
        DataType::Boolean => "bool".to_string(),
        DataType::Int8 => "int8".to_string(),
        DataType::Int16 => "int16".to_string(),
        DataType::Int32 => "int32".to_string(),
        DataType::Int64 => "int64".to_string(),
        DataType::UInt8 => "uint8".to_string(),
        DataType::UInt16 => "uint16".to_string(),
        DataType::UInt32 => "uint32".to_string(),
        DataType::UInt64 => "uint64".to_string(),
        DataType::Float32 => "float32".to_string(),
        DataType::Float64 => "float64".to_string(),
        DataType::Utf8 => "utf8".to_string(),
        DataType::LargeUtf8 => "large_utf8".to_string(),
        DataType::Binary => "binary".to_string(),
        DataType::LargeBinary => "large_binary".to_string(),
        DataType::List(item) | DataType::LargeList(item) => format!(
            "list<{}: {}{}>",
            item.name(),
            type_name(item.data_type()),
            nullable_suffix(item)
        ),
        DataType::Struct(fields) => {
            let inner: Vec<String> = fields
                .iter()
                .map(|f| format!("{}: {}{}", f.name(), type_name(f.data_type()), nullable_suffix(f)))
                .collect();
            format!("struct<{}>", inner.join(", "))
        }
        other => other.to_string().to_lowercase(),
    }
}

fn nullable_suffix(field: &Field) -> &'static str {
    if field.is_nullable() {
        ", nullable"
    } else {
        ""
    }
}
