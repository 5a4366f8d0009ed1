//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Infer Arrow schemas from JSON or YAML documents
#[derive(Parser, Debug)]
#[command(name = "map2arrow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Inference config file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Infer a schema from a document
    Infer {
        /// Document file (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Input document format (guessed from the file extension when omitted)
        #[arg(short, long)]
        input_format: Option<InputFormat>,

        /// Sort mapping keys instead of keeping document order
        #[arg(long)]
        sort_keys: bool,

        /// Fail when any field type could not be determined
        #[arg(long)]
        strict: bool,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Indented field listing
    Text,
    /// JSON field descriptors
    Json,
}

/// Input document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}
