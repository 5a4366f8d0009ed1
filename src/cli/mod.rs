//! CLI module
//!
//! Command-line interface for schema inference.
//!
//! # Commands
//!
//! - `infer` - Infer and print the schema of a JSON or YAML document

mod commands;
mod runner;

pub use commands::{Cli, Commands, InputFormat, OutputFormat};
pub use runner::Runner;
