//! Arrow schema inference from dynamic values

use super::path::{NodeId, PathTree};
use super::scalar::scalar_type_of;
use super::types::Inference;
use crate::config::{FallbackType, InferenceConfig, KeyOrder};
use crate::error::{Error, Result, UndefinedFieldType};
use crate::value::{Mapping, Value};
use arrow::datatypes::{DataType, Field, Fields, Schema};
use std::sync::Arc;
use tracing::{debug, trace};

/// Name Arrow gives to list element fields
const LIST_ITEM_NAME: &str = "item";

/// Schema inferrer with configuration options
#[derive(Debug, Clone, Default)]
pub struct SchemaInferrer {
    config: InferenceConfig,
}

impl SchemaInferrer {
    /// Create a new schema inferrer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a schema inferrer from a loaded config
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    /// Set mapping key order
    #[must_use]
    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.config.key_order = key_order;
        self
    }

    /// Set the suffix used to name list element nodes
    #[must_use]
    pub fn with_element_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.element_suffix = suffix.into();
        self
    }

    /// Set the type given to undetermined fields
    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackType) -> Self {
        self.config.fallback = fallback;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Infer a schema from a top-level mapping.
    ///
    /// Always produces a complete schema. Fields that could not be typed get
    /// the fallback type and are listed in [`Inference::errors`].
    pub fn infer(&self, map: &Mapping) -> Inference {
        let mut tree = PathTree::new();
        let root = tree.root();
        self.process_mapping(&mut tree, root, map);

        let fields = tree.child_fields(root);
        tree.set_field(
            root,
            Field::new("", DataType::Struct(Fields::from(fields.clone())), true),
        );
        let errors = tree.errors();
        debug!(
            fields = fields.len(),
            nodes = tree.len(),
            undetermined = errors.len(),
            "Inferred schema"
        );

        Inference::new(Schema::new(fields), errors, tree)
    }

    /// Infer a schema from any value; only mappings are accepted
    pub fn infer_value(&self, value: &Value) -> Result<Inference> {
        match value {
            Value::Map(map) => Ok(self.infer(map)),
            other => Err(Error::not_a_mapping(other.kind())),
        }
    }

    /// Add one child per key of `map` under `node` and type each of them
    fn process_mapping(&self, tree: &mut PathTree, node: NodeId, map: &Mapping) {
        let mut entries: Vec<(&String, &Value)> = map.iter().collect();
        if self.config.key_order == KeyOrder::Lexicographic {
            entries.sort_by(|a, b| a.0.cmp(b.0));
        }

        for (key, value) in entries {
            let child = tree.new_child(node, key.as_str());
            trace!(path = ?tree.node(child).path(), kind = value.kind(), "Classifying field");

            let data_type = match value {
                Value::Map(nested) => {
                    self.process_mapping(tree, child, nested);
                    DataType::Struct(Fields::from(tree.child_fields(child)))
                }
                Value::Sequence(seq) if seq.is_empty() => self.undefined(tree, child),
                Value::Sequence(seq) => list_of(self.resolve_element_type(tree, child, seq)),
                other => match scalar_type_of(other) {
                    Some(dt) => dt,
                    None => self.undefined(tree, child),
                },
            };
            tree.set_field(child, Field::new(key.as_str(), data_type, true));
        }
    }

    /// Element type of a non-empty sequence, taken from its first element only.
    ///
    /// Composite elements are hosted on a single synthetic child of `node`.
    fn resolve_element_type(&self, tree: &mut PathTree, node: NodeId, seq: &[Value]) -> DataType {
        let Some(first) = seq.first() else {
            return self.undefined(tree, node);
        };

        match first {
            Value::Map(nested) => {
                let elem = self.element_node(tree, node);
                self.process_mapping(tree, elem, nested);
                let dt = DataType::Struct(Fields::from(tree.child_fields(elem)));
                self.set_element_field(tree, elem, dt.clone());
                dt
            }
            Value::Sequence(inner) if inner.is_empty() => self.undefined(tree, node),
            Value::Sequence(inner) => {
                let elem = self.element_node(tree, node);
                let dt = list_of(self.resolve_element_type(tree, elem, inner));
                self.set_element_field(tree, elem, dt.clone());
                dt
            }
            other => match scalar_type_of(other) {
                Some(dt) => dt,
                None => self.undefined(tree, node),
            },
        }
    }

    fn element_node(&self, tree: &mut PathTree, node: NodeId) -> NodeId {
        let name = format!("{}{}", tree.node(node).name(), self.config.element_suffix);
        tree.new_child(node, name)
    }

    fn set_element_field(&self, tree: &mut PathTree, elem: NodeId, data_type: DataType) {
        let name = tree.node(elem).name().to_string();
        tree.set_field(elem, Field::new(name, data_type, true));
    }

    /// Record that `node` has no type information and return the fallback type
    fn undefined(&self, tree: &mut PathTree, node: NodeId) -> DataType {
        let path = tree.name_path(node);
        debug!(path = ?path, fallback = ?self.config.fallback, "Undetermined field type");
        tree.set_error(node, UndefinedFieldType::new(path));
        self.config.fallback.into()
    }
}

fn list_of(element: DataType) -> DataType {
    DataType::List(Arc::new(Field::new(LIST_ITEM_NAME, element, true)))
}

/// Infer a schema from a mapping with default settings (convenience function)
pub fn infer_schema(map: &Mapping) -> Inference {
    SchemaInferrer::new().infer(map)
}
