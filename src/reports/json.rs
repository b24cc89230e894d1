//! JSON report generator.
//!
//! The `scores` and `recommendations` fields use the same shape the remote
//! analyzer returns, so either source can feed downstream tooling.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, ScoredContent};
use crate::model::{ContentType, Recommendation, ScoreSet, SourceKind};
use crate::scoring::{TextMetrics, SCORING_ENGINE_VERSION};
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn to_bytes<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, ReportError> {
        if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        }
        .map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_report(
        &self,
        content: &ScoredContent,
        config: &ReportConfig,
    ) -> Result<Vec<u8>, ReportError> {
        let report = JsonReport {
            metadata: JsonReportMetadata::from_config(config),
            result: JsonResult::from_content(content),
        };
        self.to_bytes(&report)
    }

    fn generate_batch_report(
        &self,
        contents: &[ScoredContent],
        config: &ReportConfig,
    ) -> Result<Vec<u8>, ReportError> {
        let report = JsonBatchReport {
            metadata: JsonReportMetadata::from_config(config),
            results: contents.iter().map(JsonResult::from_content).collect(),
        };
        self.to_bytes(&report)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    metadata: JsonReportMetadata,
    #[serde(flatten)]
    result: JsonResult<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonBatchReport<'a> {
    metadata: JsonReportMetadata,
    results: Vec<JsonResult<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    scoring_engine_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_path: Option<String>,
}

impl JsonReportMetadata {
    fn from_config(config: &ReportConfig) -> Self {
        Self {
            tool: ToolInfo {
                name: "aeo-scorer".to_string(),
                version: config.metadata.tool_version.clone(),
            },
            generated_at: config.generation_time().to_rfc3339(),
            scoring_engine_version: SCORING_ENGINE_VERSION,
            input_path: config.metadata.input_path.clone(),
        }
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonResult<'a> {
    source: String,
    content_type: ContentType,
    scores: &'a ScoreSet,
    recommendations: &'a [Recommendation],
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<&'a TextMetrics>,
}

impl<'a> JsonResult<'a> {
    fn from_content(content: &'a ScoredContent) -> Self {
        Self {
            source: SourceKind::classify(&content.source_label).describe(),
            content_type: content.content_type,
            scores: &content.scores,
            recommendations: &content.recommendations,
            metrics: content.metrics.as_ref(),
        }
    }
}
