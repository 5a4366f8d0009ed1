// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]

//! # map2arrow
//!
//! Infers an Arrow schema from an already-decoded, dynamically-typed document.
//!
//! ## Features
//!
//! - **Exact Scalar Types**: each integer and float width maps to the same Arrow width
//! - **Nested Structs and Lists**: mappings become structs, sequences become lists
//!   typed by their first element, to any depth
//! - **Best-Effort Schemas**: null values and empty sequences fall back to binary
//!   and are reported by key path instead of failing the whole inference
//! - **JSON and YAML Input**: decoded documents convert into [`Value`]
//!
//! ## Quick Start
//!
//! ```rust
//! use map2arrow::{from_json_str, SchemaInferrer};
//!
//! let doc = from_json_str(r#"{"count": 89, "previous": null}"#).unwrap();
//! let inference = SchemaInferrer::new().infer_value(&doc).unwrap();
//!
//! assert_eq!(inference.schema().fields().len(), 2);
//! assert_eq!(inference.ambiguous_paths(), vec![vec!["previous".to_string()]]);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐    ┌──────────────────────────────┐    ┌──────────────┐
//! │   Value    │ →  │        SchemaInferrer        │ →  │  Inference   │
//! │ (decoded)  │    │  PathTree + scalar_type_of   │    │ schema+errors│
//! └────────────┘    └──────────────────────────────┘    └──────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for map2arrow
pub mod error;

/// Dynamic document values
pub mod value;

/// Inference configuration
pub mod config;

/// Schema inference from dynamic values
pub mod schema;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{FallbackType, InferenceConfig, KeyOrder};
pub use error::{Error, InferenceErrors, Result, UndefinedFieldType};
pub use schema::{infer_schema, Inference, SchemaInferrer};
pub use value::{from_json_str, from_yaml_str, Mapping, Value};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
