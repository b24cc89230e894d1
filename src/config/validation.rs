//! Configuration validation.

use super::defaults::MAX_RETRIES_LIMIT;
use super::types::{
    AnalyzerConfig, AnalyzerMode, AppConfig, OutputConfig, ReportSettings, ScoringConfig,
};
use crate::model::ContentType;
use crate::reports::layout::{footer_fits, FOOTER_MAX_LINES};

// ============================================================================
// Configuration Error
// ============================================================================

/// A field-level configuration problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.scoring.validate());
        errors.extend(self.report.validate());
        errors.extend(self.analyzer.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (name, terms) in &self.lexicons {
            let field = format!("scoring.lexicons.{name}");
            if ContentType::try_parse(name).is_none() {
                errors.push(ConfigError::new(
                    field,
                    format!("Unknown content type '{name}'. Valid options: blog, product, service, other"),
                ));
            } else if terms.iter().all(|t| t.trim().is_empty()) {
                errors.push(ConfigError::new(field, "Lexicon must contain at least one term"));
            }
        }
        errors
    }
}

impl Validatable for ReportSettings {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(ConfigError::new("report.title", "Title must not be empty"));
        }
        if self.filename.as_os_str().is_empty() {
            errors.push(ConfigError::new("report.filename", "Filename must not be empty"));
        }
        if !footer_fits(&self.footer) {
            errors.push(ConfigError::new(
                "report.footer",
                format!("Footer must fit on {FOOTER_MAX_LINES} lines"),
            ));
        }
        errors
    }
}

impl Validatable for AnalyzerConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        match self.endpoint.as_deref() {
            Some(endpoint) => {
                if let Err(e) = url::Url::parse(endpoint) {
                    errors.push(ConfigError::new(
                        "analyzer.endpoint",
                        format!("Invalid endpoint URL '{endpoint}': {e}"),
                    ));
                }
            }
            None if self.mode == AnalyzerMode::Remote => {
                errors.push(ConfigError::new(
                    "analyzer.endpoint",
                    "Remote mode requires an endpoint",
                ));
            }
            None => {}
        }

        if self.timeout_secs == 0 {
            errors.push(ConfigError::new(
                "analyzer.timeout_secs",
                "Timeout must be at least 1 second",
            ));
        }
        if self.max_retries > MAX_RETRIES_LIMIT {
            errors.push(ConfigError::new(
                "analyzer.max_retries",
                format!(
                    "Retries must be at most {MAX_RETRIES_LIMIT}, got {}",
                    self.max_retries
                ),
            ));
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // Validate output file path if specified
        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }
        errors
    }
}
