//! Configuration types for schema inference
//!
//! Inference options can be built in code or loaded from a YAML/JSON file:
//!
//! ```yaml
//! key_order: lexicographic
//! element_suffix: ".elem"
//! fallback: binary
//! ```

use crate::error::{Error, Result};
use arrow::datatypes::DataType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Inference Config
// ============================================================================

/// Options controlling how a document is walked and typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Order in which mapping keys become fields
    #[serde(default)]
    pub key_order: KeyOrder,

    /// Suffix appended to a list's name to name its element node
    #[serde(default = "default_element_suffix")]
    pub element_suffix: String,

    /// Type assigned to fields whose type cannot be determined
    #[serde(default)]
    pub fallback: FallbackType,
}

fn default_element_suffix() -> String {
    ".elem".to_string()
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            key_order: KeyOrder::default(),
            element_suffix: default_element_suffix(),
            fallback: FallbackType::default(),
        }
    }
}

impl InferenceConfig {
    /// Load a config file; `.json` files are parsed as JSON, anything else as YAML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML config
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check option values
    pub fn validate(&self) -> Result<()> {
        if self.element_suffix.is_empty() {
            return Err(Error::config("element_suffix must not be empty"));
        }
        Ok(())
    }
}

// ============================================================================
// Options
// ============================================================================

/// Field ordering for mappings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyOrder {
    /// Keep the mapping's own key order
    #[default]
    Document,
    /// Sort keys lexicographically
    Lexicographic,
}

/// Arrow type used for fields with no type information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackType {
    /// Opaque binary
    #[default]
    Binary,
    /// Opaque binary with 64-bit offsets
    LargeBinary,
}

impl From<FallbackType> for DataType {
    fn from(fallback: FallbackType) -> Self {
        match fallback {
            FallbackType::Binary => DataType::Binary,
            FallbackType::LargeBinary => DataType::LargeBinary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = InferenceConfig::default();
        assert_eq!(config.key_order, KeyOrder::Document);
        assert_eq!(config.element_suffix, ".elem");
        assert_eq!(config.fallback, FallbackType::Binary);
        assert_eq!(DataType::from(config.fallback), DataType::Binary);
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
key_order: lexicographic
element_suffix: "[]"
fallback: large_binary
"#;

        let config = InferenceConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.key_order, KeyOrder::Lexicographic);
        assert_eq!(config.element_suffix, "[]");
        assert_eq!(DataType::from(config.fallback), DataType::LargeBinary);
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config = InferenceConfig::from_yaml_str("fallback: large_binary\n").unwrap();
        assert_eq!(config.key_order, KeyOrder::Document);
        assert_eq!(config.element_suffix, ".elem");
        assert_eq!(config.fallback, FallbackType::LargeBinary);
    }

    #[test]
    fn test_non_binary_fallback_rejected() {
        let err = InferenceConfig::from_yaml_str("fallback: utf8\n").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"key_order": "lexicographic"}}"#).unwrap();

        let config = InferenceConfig::from_file(file.path()).unwrap();
        assert_eq!(config.key_order, KeyOrder::Lexicographic);
    }

    #[test]
    fn test_load_missing_file() {
        let err = InferenceConfig::from_file("/nonexistent/map2arrow.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_empty_suffix_rejected() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "element_suffix: \"\"").unwrap();

        let err = InferenceConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("element_suffix"));
    }

    #[test]
    fn test_unknown_key_order_rejected() {
        assert!(InferenceConfig::from_yaml_str("key_order: random\n").is_err());
    }
}
