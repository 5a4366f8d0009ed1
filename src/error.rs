//! Error types for map2arrow
//!
//! This module defines the error hierarchy for the entire crate.
//! All fallible public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Ambiguous field types are not fatal: they are reported as
//! [`UndefinedFieldType`] diagnostics collected into [`InferenceErrors`],
//! and only become an [`Error`] when a caller asks for strict handling.

use std::fmt;
use thiserror::Error;

/// The main error type for map2arrow
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Inference Errors
    // ============================================================================
    #[error(transparent)]
    UndefinedFieldType(#[from] UndefinedFieldType),

    #[error("schema inference left {count} field(s) undetermined:\n{0}", count = .0.len())]
    Inference(InferenceErrors),

    #[error("Expected a mapping at the document root, found {kind}")]
    NotAMapping { kind: String },

    #[error("{path} child index {index} not found")]
    ChildNotFound { path: String, index: usize },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to decode document: {message}")]
    Decode { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a not-a-mapping error
    pub fn not_a_mapping(kind: impl Into<String>) -> Self {
        Self::NotAMapping { kind: kind.into() }
    }

    /// Create a missing child error
    pub fn child_not_found(path: &[String], index: usize) -> Self {
        Self::ChildNotFound {
            path: format!("{path:?}"),
            index,
        }
    }

    /// Check if this error only reports ambiguous field types.
    ///
    /// Such errors come with a complete best-effort schema, so callers may
    /// choose to treat them as warnings.
    pub fn is_ambiguity(&self) -> bool {
        matches!(self, Error::UndefinedFieldType(_) | Error::Inference(_))
    }
}

/// Result type alias for map2arrow
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

// ============================================================================
// Inference diagnostics
// ============================================================================

/// A field whose type could not be determined from the document.
///
/// Raised for null values, empty sequences and scalar kinds with no Arrow
/// counterpart. The field is still present in the schema with a fallback type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("could not determine type of unpopulated field : {path:?}")]
pub struct UndefinedFieldType {
    /// Key path from the document root
    pub path: Vec<String>,
}

impl UndefinedFieldType {
    /// Create a diagnostic for the given key path
    pub fn new(path: Vec<String>) -> Self {
        Self { path }
    }

    /// Key path from the document root
    pub fn path(&self) -> &[String] {
        &self.path
    }
}

/// Every [`UndefinedFieldType`] raised during one inference, in depth-first order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InferenceErrors {
    errors: Vec<UndefinedFieldType>,
}

impl InferenceErrors {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic
    pub fn push(&mut self, error: UndefinedFieldType) {
        self.errors.push(error);
    }

    /// Number of diagnostics
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when inference determined every field type
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate over the diagnostics
    pub fn iter(&self) -> std::slice::Iter<'_, UndefinedFieldType> {
        self.errors.iter()
    }

    /// Key paths of every undetermined field
    pub fn paths(&self) -> Vec<&[String]> {
        self.errors.iter().map(UndefinedFieldType::path).collect()
    }

    /// Convert into an error, or `None` when the report is empty
    pub fn into_error(self) -> Option<Error> {
        if self.is_empty() {
            None
        } else {
            Some(Error::Inference(self))
        }
    }
}

impl fmt::Display for InferenceErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for InferenceErrors {}

impl Extend<UndefinedFieldType> for InferenceErrors {
    fn extend<I: IntoIterator<Item = UndefinedFieldType>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl FromIterator<UndefinedFieldType> for InferenceErrors {
    fn from_iter<I: IntoIterator<Item = UndefinedFieldType>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for InferenceErrors {
    type Item = UndefinedFieldType;
    type IntoIter = std::vec::IntoIter<UndefinedFieldType>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a InferenceErrors {
    type Item = &'a UndefinedFieldType;
    type IntoIter = std::slice::Iter<'a, UndefinedFieldType>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::not_a_mapping("sequence");
        assert_eq!(
            err.to_string(),
            "Expected a mapping at the document root, found sequence"
        );

        let err = Error::child_not_found(&path(&["a", "b"]), 3);
        assert_eq!(err.to_string(), r#"["a", "b"] child index 3 not found"#);
    }

    #[test]
    fn test_undefined_field_type_display() {
        let err = UndefinedFieldType::new(path(&["results", "nullarray"]));
        assert_eq!(
            err.to_string(),
            r#"could not determine type of unpopulated field : ["results", "nullarray"]"#
        );
    }

    #[test]
    fn test_inference_errors_keep_every_entry() {
        let report: InferenceErrors = vec![
            UndefinedFieldType::new(path(&["c"])),
            UndefinedFieldType::new(path(&["c"])),
            UndefinedFieldType::new(path(&["d"])),
        ]
        .into_iter()
        .collect();

        assert_eq!(report.len(), 3);
        let paths: Vec<Vec<String>> = report.paths().into_iter().map(<[String]>::to_vec).collect();
        assert_eq!(paths, vec![path(&["c"]), path(&["c"]), path(&["d"])]);
        assert_eq!(report.to_string().lines().count(), 3);
    }

    #[test]
    fn test_into_error() {
        assert!(InferenceErrors::new().into_error().is_none());

        let mut report = InferenceErrors::new();
        report.push(UndefinedFieldType::new(path(&["d"])));
        let err = report.into_error().unwrap();
        assert!(err.is_ambiguity());
        assert!(err.to_string().starts_with("schema inference left 1 field(s)"));
    }

    #[test]
    fn test_is_ambiguity() {
        assert!(Error::from(UndefinedFieldType::new(path(&["x"]))).is_ambiguity());
        assert!(!Error::config("test").is_ambiguity());
        assert!(!Error::decode("bad").is_ambiguity());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
