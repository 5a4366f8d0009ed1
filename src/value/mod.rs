//! Dynamic document values
//!
//! The input vocabulary of schema inference: a closed set of shapes
//! (mapping, sequence, scalars of each width, null) produced by decoding a
//! semi-structured document.
//!
//! # Key order
//!
//! [`Mapping`] is insertion-ordered. JSON objects keep document order because
//! `serde_json` is built with `preserve_order`; YAML mappings keep theirs natively.

mod convert;
mod types;

pub use convert::{from_json_str, from_yaml_str};
pub use types::{Mapping, Value};
