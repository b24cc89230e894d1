//! Configuration types for aeo-scorer.

use super::defaults::{DEFAULT_API_KEY_ENV, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use crate::reports::{
    ReportConfig, ReportFormat, DEFAULT_FOOTER, DEFAULT_REPORT_FILENAME, DEFAULT_REPORT_TITLE,
};
use crate::scoring::LexiconSet;
use clap::ValueEnum;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Top-level configuration, loaded from a config file and overridden by
/// CLI arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Scoring configuration (lexicon overrides)
    pub scoring: ScoringConfig,
    /// PDF report configuration
    pub report: ReportSettings,
    /// Analyzer selection and remote endpoint settings
    pub analyzer: AnalyzerConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lexicons with any configured per-type overrides applied.
    #[must_use]
    pub fn lexicons(&self) -> LexiconSet {
        if self.scoring.lexicons.is_empty() {
            LexiconSet::builtin()
        } else {
            LexiconSet::with_overrides(&self.scoring.lexicons)
        }
    }

    /// Report settings as a renderer configuration.
    #[must_use]
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            title: self.report.title.clone(),
            footer: self.report.footer.clone(),
            include_content_dump: self.report.include_content_dump,
            ..ReportConfig::default()
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Scoring configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Replacement keyword lists keyed by content type
    /// (`blog`, `product`, `service`, `other`)
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub lexicons: IndexMap<String, Vec<String>>,
}

/// PDF report settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ReportSettings {
    /// Title in the page header and document properties
    pub title: String,
    /// Caption stamped on every page
    pub footer: String,
    /// Default output file name
    pub filename: PathBuf,
    /// Append the analyzed content on its own page
    pub include_content_dump: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_REPORT_TITLE.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
            filename: PathBuf::from(DEFAULT_REPORT_FILENAME),
            include_content_dump: true,
        }
    }
}

/// Which analyzer produces scores
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerMode {
    /// Built-in scoring engine
    #[default]
    Local,
    /// HTTP analysis endpoint
    Remote,
}

impl std::fmt::Display for AnalyzerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Analyzer to use
    pub mode: AnalyzerMode,
    /// Remote endpoint URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Environment variable holding the bearer key
    pub api_key_env: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Retries after a failed request
    pub max_retries: u8,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            mode: AnalyzerMode::Local,
            endpoint: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl AnalyzerConfig {
    /// Read the bearer key from the configured environment variable.
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format for `analyze`
    pub format: ReportFormat,
    /// Output file path (stdout when omitted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}
