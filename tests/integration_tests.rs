//! Integration tests for the public inference API
//!
//! Tests the full flow: document text → dynamic value → Arrow schema + diagnostics

use arrow::datatypes::{DataType, Field, Fields};
use map2arrow::schema::render_text;
use map2arrow::{
    from_json_str, from_yaml_str, infer_schema, Error, FallbackType, InferenceConfig, KeyOrder,
    Mapping, SchemaInferrer, Value,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

const SEARCH_RESPONSE: &str = r#"{
    "count": 89,
    "next": "https://sub.domain.com/api/search/?models=thurblig",
    "previous": null,
    "results": [
      {
        "id": 6328,
        "name": "New user SMB check 2310-1",
        "external_id": null,
        "title": "New user SMB check 2310-1",
        "content_type": "new agent",
        "model": "Agent",
        "data": {
          "id": 6328,
          "dsp": {
            "id": 116,
            "name": "El Thingy Bueno",
            "nullarray": []
          },
          "name": "New user SMB check 2310-1",
          "agency": {
            "id": 925,
            "name": "New user SMB check 2310-1"
          },
          "export_status": {
            "status": true
          }
        }
      }
    ]
}"#;

fn list(element: DataType) -> DataType {
    DataType::List(Arc::new(Field::new("item", element, true)))
}

fn strukt(fields: Vec<Field>) -> DataType {
    DataType::Struct(Fields::from(fields))
}

fn path(segments: &[&str]) -> Vec<String> {
    segments.iter().map(ToString::to_string).collect()
}

// ============================================================================
// End-to-end Inference
// ============================================================================

#[test]
fn test_search_response_schema() {
    let doc = from_json_str(SEARCH_RESPONSE).unwrap();
    let inference = SchemaInferrer::new().infer_value(&doc).unwrap();
    let schema = inference.schema();

    let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    assert_eq!(names, vec!["count", "next", "previous", "results"]);
    assert_eq!(schema.field(0).data_type(), &DataType::Int64);
    assert_eq!(schema.field(1).data_type(), &DataType::Utf8);
    assert_eq!(schema.field(2).data_type(), &DataType::Binary);

    let DataType::List(item) = schema.field(3).data_type() else {
        panic!("results should be a list");
    };
    let DataType::Struct(result_fields) = item.data_type() else {
        panic!("results should hold structs");
    };
    assert_eq!(result_fields.len(), 7);
    assert!(schema.fields().iter().all(|f| f.is_nullable()));

    assert_eq!(
        inference.ambiguous_paths(),
        vec![
            path(&["previous"]),
            path(&["results", "results.elem", "external_id"]),
            path(&["results", "results.elem", "data", "dsp", "nullarray"]),
        ]
    );
}

#[test]
fn test_best_effort_schema_with_strict_caller() {
    let doc = from_json_str(SEARCH_RESPONSE).unwrap();
    let inference = SchemaInferrer::new().infer_value(&doc).unwrap();

    let (schema, errors) = inference.clone().into_parts();
    assert_eq!(schema.fields().len(), 4);
    assert_eq!(errors.unwrap().len(), 3);

    match inference.into_result() {
        Err(Error::Inference(errors)) => assert_eq!(errors.len(), 3),
        other => panic!("expected aggregated inference error, got {other:?}"),
    }
}

#[test]
fn test_json_and_yaml_agree() {
    let json = from_json_str(r#"{"id": 1, "tags": ["a"], "meta": {"ok": true}}"#).unwrap();
    let yaml = from_yaml_str("id: 1\ntags: [a]\nmeta:\n  ok: true\n").unwrap();

    let from_json = SchemaInferrer::new().infer_value(&json).unwrap();
    let from_yaml = SchemaInferrer::new().infer_value(&yaml).unwrap();
    assert_eq!(from_json.schema(), from_yaml.schema());
}

#[test]
fn test_native_values_keep_width() {
    let mut inner = Mapping::new();
    inner.insert("ratio".to_string(), Value::Float32(0.5));

    let mut doc = Mapping::new();
    doc.insert("flags".to_string(), Value::UInt8(3));
    doc.insert("offset".to_string(), Value::Int16(-4));
    doc.insert("raw".to_string(), Value::from(vec![1u8, 2, 3]));
    doc.insert(
        "points".to_string(),
        Value::Sequence(vec![Value::Map(inner)]),
    );

    let inference = infer_schema(&doc);
    let schema = inference.schema();
    assert_eq!(schema.field(0).data_type(), &DataType::UInt8);
    assert_eq!(schema.field(1).data_type(), &DataType::Int16);
    assert_eq!(schema.field(2).data_type(), &DataType::Binary);
    assert_eq!(
        schema.field(3).data_type(),
        &list(strukt(vec![Field::new("ratio", DataType::Float32, true)]))
    );
    assert!(inference.is_complete());
}

#[test]
fn test_config_driven_inference() {
    let config = InferenceConfig::from_yaml_str(
        "key_order: lexicographic\nelement_suffix: \"#\"\nfallback: large_binary\n",
    )
    .unwrap();
    assert_eq!(config.key_order, KeyOrder::Lexicographic);
    assert_eq!(config.fallback, FallbackType::LargeBinary);

    let doc = from_json_str(r#"{"z": [{"n": null}], "a": 1}"#).unwrap();
    let inference = SchemaInferrer::with_config(config)
        .infer_value(&doc)
        .unwrap();

    assert_eq!(
        render_text(inference.schema()),
        "schema:\n  fields: 2\n    - a: type=int64, nullable\n    - z: type=list<item: struct, nullable>, nullable\n        - n: type=large_binary, nullable\n"
    );
    assert_eq!(inference.ambiguous_paths(), vec![path(&["z", "z#", "n"])]);
}

#[test]
fn test_deeply_nested_lists() {
    let doc = from_json_str(r#"{"cube": [[[1.5]]]}"#).unwrap();
    let inference = SchemaInferrer::new().infer_value(&doc).unwrap();
    assert_eq!(
        inference.schema().field(0).data_type(),
        &list(list(list(DataType::Float64)))
    );
}
