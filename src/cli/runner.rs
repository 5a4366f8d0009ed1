//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, InputFormat, OutputFormat};
use crate::config::{InferenceConfig, KeyOrder};
use crate::error::{Error, Result, ResultExt};
use crate::schema::{render_json, render_text, SchemaInferrer};
use crate::value::{from_json_str, from_yaml_str, Value};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Infer {
                input,
                input_format,
                sort_keys,
                strict,
            } => {
                let output = self.infer(input.as_deref(), *input_format, *sort_keys, *strict)?;
                println!("{output}");
                Ok(())
            }
        }
    }

    /// Load the inference config, or defaults when no file was given
    fn load_config(&self) -> Result<InferenceConfig> {
        match &self.cli.config {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                InferenceConfig::from_file(path)
            }
            None => Ok(InferenceConfig::default()),
        }
    }

    /// Infer a schema and render it in the selected output format
    pub fn infer(
        &self,
        input: Option<&Path>,
        input_format: Option<InputFormat>,
        sort_keys: bool,
        strict: bool,
    ) -> Result<String> {
        let mut config = self.load_config()?;
        if sort_keys {
            config.key_order = KeyOrder::Lexicographic;
        }

        let content = read_input(input)?;
        let format = input_format.unwrap_or_else(|| guess_format(input));
        let document = decode(&content, format).with_context(|| match input {
            Some(path) => format!("Failed to decode '{}'", path.display()),
            None => "Failed to decode stdin".to_string(),
        })?;

        let inference = SchemaInferrer::with_config(config).infer_value(&document)?;
        for err in inference.errors() {
            warn!("{err}");
        }

        let rendered = match self.cli.format {
            OutputFormat::Text => render_text(inference.schema()),
            OutputFormat::Json => serde_json::to_string_pretty(&render_json(inference.schema()))?,
        };

        if strict {
            if let Some(err) = inference.errors().clone().into_error() {
                return Err(err);
            }
        }
        Ok(rendered)
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn guess_format(input: Option<&Path>) -> InputFormat {
    let ext = input
        .and_then(Path::extension)
        .map(|ext| ext.to_string_lossy().to_lowercase());
    match ext.as_deref() {
        Some("yaml" | "yml") => InputFormat::Yaml,
        _ => InputFormat::Json,
    }
}

fn decode(content: &str, format: InputFormat) -> Result<Value> {
    match format {
        InputFormat::Json => from_json_str(content),
        InputFormat::Yaml => from_yaml_str(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn runner(args: &[&str]) -> Runner {
        let mut argv = vec!["map2arrow"];
        argv.extend_from_slice(args);
        Runner::new(Cli::parse_from(argv))
    }

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_guess_format() {
        assert_eq!(guess_format(Some(Path::new("doc.yaml"))), InputFormat::Yaml);
        assert_eq!(guess_format(Some(Path::new("doc.YML"))), InputFormat::Yaml);
        assert_eq!(guess_format(Some(Path::new("doc.json"))), InputFormat::Json);
        assert_eq!(guess_format(None), InputFormat::Json);
    }

    #[test]
    fn test_infer_json_file_text() {
        let file = write_temp(".json", r#"{"count": 89, "previous": null}"#);
        let out = runner(&["infer"])
            .infer(Some(file.path()), None, false, false)
            .unwrap();
        assert!(out.contains("- count: type=int64, nullable"));
        assert!(out.contains("- previous: type=binary, nullable"));
    }

    #[test]
    fn test_infer_yaml_file_json_output() {
        let file = write_temp(".yaml", "b: 1\na: [x]\n");
        let out = runner(&["--format", "json", "infer"])
            .infer(Some(file.path()), None, true, false)
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["fields"][0]["name"], "a");
        assert_eq!(parsed["fields"][1]["name"], "b");
    }

    #[test]
    fn test_strict_rejects_ambiguity() {
        let file = write_temp(".json", r#"{"empty": []}"#);
        let err = runner(&["infer", "--strict"])
            .infer(Some(file.path()), None, false, true)
            .unwrap_err();
        assert!(err.is_ambiguity());
    }

    #[test]
    fn test_non_mapping_document() {
        let file = write_temp(".json", "[1, 2]");
        let err = runner(&["infer"])
            .infer(Some(file.path()), None, false, false)
            .unwrap_err();
        assert!(matches!(err, Error::NotAMapping { .. }));
    }

    #[test]
    fn test_missing_input() {
        let err = runner(&["infer"])
            .infer(Some(Path::new("/nonexistent/doc.json")), None, false, false)
            .unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
