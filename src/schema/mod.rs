//! Schema inference module
//!
//! Infers an Arrow schema from a decoded document.
//!
//! # Overview
//!
//! - **Path Tree**: one node per field position, with its key path and resolved field
//! - **Scalar Resolution**: exact mapping from scalar widths to Arrow primitives
//! - **Recursive Walk**: mappings become structs, sequences become lists typed
//!   by their first element
//! - **Fallbacks**: null values and empty sequences get an opaque binary type
//!   and an [`UndefinedFieldType`](crate::error::UndefinedFieldType) diagnostic

mod inference;
mod path;
mod render;
mod scalar;
mod types;

pub use inference::{infer_schema, SchemaInferrer};
pub use path::{NodeId, PathNode, PathTree};
pub use render::{render_json, render_text, type_name};
pub use scalar::scalar_type_of;
pub use types::Inference;
