//! Report generation for scored content.
//!
//! This module provides several output formats for analysis results:
//! - PDF: Paginated, deterministic report for sharing
//! - JSON: Structured data, wire-compatible with the remote analyzer
//! - Summary: Compact shell-friendly output
//!
//! PDF output goes through an intermediate [`LayoutDocument`] so pagination
//! and wrapping can be inspected without decoding the PDF.

pub mod layout;
mod json;
mod pdf;
mod sections;
mod summary;
pub mod text_bank;
mod types;

pub use json::JsonReporter;
pub use layout::LayoutDocument;
pub use pdf::{encode_win_ansi, PdfReporter};
pub use sections::{render_content, render_report, CONTENT_DUMP_CHARS};
pub use summary::SummaryReporter;
pub use types::{
    ReportConfig, ReportFormat, ReportMetadata, ScoredContent, DEFAULT_FOOTER,
    DEFAULT_REPORT_FILENAME, DEFAULT_REPORT_TITLE,
};

use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("PDF error: {0}")]
    PdfError(String),

    #[error("Unsupported: {0}")]
    Unsupported(String),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report for one piece of content
    fn generate_report(
        &self,
        content: &ScoredContent,
        config: &ReportConfig,
    ) -> Result<Vec<u8>, ReportError>;

    /// Generate one report covering several pieces of content
    fn generate_batch_report(
        &self,
        contents: &[ScoredContent],
        config: &ReportConfig,
    ) -> Result<Vec<u8>, ReportError> {
        match contents {
            [single] => self.generate_report(single, config),
            _ => Err(ReportError::Unsupported(format!(
                "{} output covers exactly one input, got {}",
                self.format(),
                contents.len()
            ))),
        }
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Pdf => Box::new(PdfReporter::new()),
    }
}
