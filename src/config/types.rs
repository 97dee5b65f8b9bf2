use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use super::matcher::{
    MatcherError,
    compile_glob,
};
use crate::extractor::MatchMode;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "include[0]")
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

    #[error(transparent)]
    Matcher(#[from] MatcherError),
}

/// Formats validation errors as a numbered list.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One glob pattern or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Patterns {
    Single(String),
    List(Vec<String>),
}

impl Patterns {
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Single(pattern) => std::slice::from_ref(pattern),
            Self::List(patterns) => patterns,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<&str> for Patterns {
    fn from(pattern: &str) -> Self {
        Self::Single(pattern.to_string())
    }
}

impl From<String> for Patterns {
    fn from(pattern: String) -> Self {
        Self::Single(pattern)
    }
}

impl From<Vec<String>> for Patterns {
    fn from(patterns: Vec<String>) -> Self {
        Self::List(patterns)
    }
}

impl From<&[&str]> for Patterns {
    fn from(patterns: &[&str]) -> Self {
        Self::List(patterns.iter().copied().map(String::from).collect())
    }
}

/// Options accepted by [`ExtractDrupalT`](crate::ExtractDrupalT).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractOptions {
    /// Ids to scan. Absent means every id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Patterns>,

    /// Ids never scanned, even when included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Patterns>,

    /// Absolute ids under this directory are matched by their relative path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,

    pub match_mode: MatchMode,
}

impl ExtractOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_include(mut self, patterns: impl Into<Patterns>) -> Self {
        self.include = Some(patterns.into());
        self
    }

    #[must_use]
    pub fn with_exclude(mut self, patterns: impl Into<Patterns>) -> Self {
        self.exclude = Some(patterns.into());
        self
    }

    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    #[must_use]
    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    /// # Errors
    /// - Invalid glob pattern
    /// - Empty pattern
    /// - Empty base directory
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        validate_patterns("include", self.include.as_ref(), &mut errors);
        validate_patterns("exclude", self.exclude.as_ref(), &mut errors);

        if self.base_dir.as_ref().is_some_and(|dir| dir.as_os_str().is_empty()) {
            errors.push(ValidationError::new(
                "baseDir",
                "The directory cannot be empty. Please specify a path, or remove this field",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Checks every pattern of one field, recording a path like `include[1]`.
fn validate_patterns(field: &str, patterns: Option<&Patterns>, errors: &mut Vec<ValidationError>) {
    let Some(patterns) = patterns else {
        return;
    };

    for (index, pattern) in patterns.as_slice().iter().enumerate() {
        let field_path = match patterns {
            Patterns::Single(_) => field.to_string(),
            Patterns::List(_) => format!("{field}[{index}]"),
        };

        if pattern.is_empty() {
            errors.push(ValidationError::new(
                field_path,
                "The pattern cannot be empty. Example: \"**/*.js\"",
            ));
        } else if let Err(e) = compile_glob(pattern) {
            errors.push(ValidationError::new(
                field_path,
                format!("Invalid glob pattern '{pattern}': {e}"),
            ));
        }
    }
}
