use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::input::DEFAULT_TEMP_EXTENSION;
use crate::language::Language;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "excludePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings read from `.ui-i18n.json`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslatorSettings {
    /// Glob, relative to the project root, locating the translation table.
    pub table_file_pattern: String,

    pub exclude_patterns: Vec<String>,

    /// Display language used when none is given explicitly.
    /// If unset, the language is detected from the environment.
    pub default_language: Option<Language>,

    /// Extension of the temporary file a table stream is spooled to when the
    /// reader cannot parse streams directly.
    pub temp_file_extension: String,
}

impl TranslatorSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.table_file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "tableFilePattern",
                "The pattern cannot be empty. Example: \"**/Languages.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.table_file_pattern) {
            errors.push(ValidationError::new(
                "tableFilePattern",
                format!("Invalid glob pattern '{}': {e}", self.table_file_pattern),
            ));
        }

        for (index, pattern) in self.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        let extension = self.temp_file_extension.trim_start_matches('.');
        if extension.is_empty() {
            errors.push(ValidationError::new(
                "tempFileExtension",
                "The extension cannot be empty. Example: \"json\"",
            ));
        } else if extension.contains(['/', '\\']) {
            errors.push(ValidationError::new(
                "tempFileExtension",
                format!("The extension '{extension}' must not contain path separators"),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            table_file_pattern: "**/Languages.json".to_string(),
            exclude_patterns: vec!["target/**".to_string()],
            default_language: None,
            temp_file_extension: DEFAULT_TEMP_EXTENSION.to_string(),
        }
    }
}
