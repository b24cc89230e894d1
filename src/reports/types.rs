//! Report type definitions.

use crate::model::{ContentType, Recommendation, ScoreSet};
use crate::scoring::{recommend, TextMetrics};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default file name for rendered PDF reports
pub const DEFAULT_REPORT_FILENAME: &str = "aeo-analysis-report.pdf";
/// Default report title
pub const DEFAULT_REPORT_TITLE: &str = "AEO Content Analysis Report";
/// Default caption stamped at the bottom of every page
pub const DEFAULT_FOOTER: &str = "Generated by AEO Scorer - AI Engine Optimization Analysis";

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Summary on a terminal, JSON otherwise
    #[default]
    Auto,
    /// Brief colored summary
    Summary,
    /// Structured JSON, wire-compatible with the remote analyzer
    Json,
    /// Paginated PDF document
    Pdf,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Pdf => write!(f, "pdf"),
        }
    }
}

/// One analyzed piece of content, ready for any reporter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredContent {
    pub scores: ScoreSet,
    pub recommendations: Vec<Recommendation>,
    /// URL or text preview, display only
    pub source_label: String,
    pub content_type: ContentType,
    /// Raw measurements, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<TextMetrics>,
}

impl ScoredContent {
    /// Wrap a score set, deriving recommendations locally.
    pub fn new(
        scores: ScoreSet,
        source_label: impl Into<String>,
        content_type: ContentType,
    ) -> Self {
        Self {
            recommendations: recommend(&scores, content_type),
            scores,
            source_label: source_label.into(),
            content_type,
            metrics: None,
        }
    }

    /// Replace the derived recommendations (e.g. with a remote analyzer's).
    #[must_use]
    pub fn with_recommendations(mut self, recommendations: Vec<Recommendation>) -> Self {
        self.recommendations = recommendations;
        self
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: TextMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title printed in the header and the PDF Info dictionary
    pub title: String,
    /// Caption stamped identically on every page
    pub footer: String,
    /// Emit the analyzed-content page
    pub include_content_dump: bool,
    /// Print the content type under the source description
    pub show_content_type: bool,
    /// Timestamp shown in the header. `None` means now.
    pub generated_at: Option<DateTime<Utc>>,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_REPORT_TITLE.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
            include_content_dump: true,
            show_content_type: true,
            generated_at: None,
            metadata: ReportMetadata::new(),
        }
    }
}

impl ReportConfig {
    /// Pin the generation timestamp
    #[must_use]
    pub fn at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Timestamp to render, falling back to the current time
    #[must_use]
    pub fn generation_time(&self) -> DateTime<Utc> {
        self.generated_at.unwrap_or_else(Utc::now)
    }

    /// Header date line, e.g. `Generated on June 15, 2023`
    #[must_use]
    pub fn generated_on(&self) -> String {
        format!("Generated on {}", self.generation_time().format("%B %-d, %Y"))
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Tool version
    pub tool_version: String,
    /// Input file path, when content came from a file
    pub input_path: Option<String>,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }
}
