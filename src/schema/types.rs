//! Schema inference result types

use super::path::PathTree;
use crate::error::{InferenceErrors, Result};
use arrow::datatypes::Schema;

/// Outcome of one inference call: a best-effort schema plus its diagnostics
#[derive(Debug, Clone)]
pub struct Inference {
    schema: Schema,
    errors: InferenceErrors,
    tree: PathTree,
}

impl Inference {
    pub(crate) fn new(schema: Schema, errors: InferenceErrors, tree: PathTree) -> Self {
        Self {
            schema,
            errors,
            tree,
        }
    }

    /// The inferred schema, always structurally complete
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Every undetermined field, in depth-first order
    pub fn errors(&self) -> &InferenceErrors {
        &self.errors
    }

    /// The path tree built during inference
    pub fn tree(&self) -> &PathTree {
        &self.tree
    }

    /// True when every field got a concrete type
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Key paths of every undetermined field
    pub fn ambiguous_paths(&self) -> Vec<Vec<String>> {
        self.errors.iter().map(|e| e.path().to_vec()).collect()
    }

    /// Split into the schema and the aggregated error, if any
    pub fn into_parts(self) -> (Schema, Option<InferenceErrors>) {
        let errors = if self.errors.is_empty() {
            None
        } else {
            Some(self.errors)
        };
        (self.schema, errors)
    }

    /// Strict handling: reject the schema if any field is undetermined
    pub fn into_result(self) -> Result<Schema> {
        match self.errors.into_error() {
            Some(err) => Err(err),
            None => Ok(self.schema),
        }
    }
}
