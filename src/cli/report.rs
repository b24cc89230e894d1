//! Report command handler.
//!
//! Implements the `report` subcommand: analyze one input and save it as a
//! PDF report.

use crate::config::AppConfig;
use crate::model::ContentType;
use crate::pipeline::{exit_codes, AnalysisPipeline, InputSource};
use crate::reports::PdfReporter;
use anyhow::Result;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Options for the `report` command
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub input: InputSource,
    pub content_type: ContentType,
    /// Destination PDF path
    pub output_file: PathBuf,
    /// Overrides the configured report title
    pub title: Option<String>,
    /// Skip the analyzed-content page
    pub no_content_dump: bool,
    /// Pinned header date; `None` means now
    pub generated_at: Option<DateTime<Utc>>,
    pub quiet: bool,
}

/// Run the report command, returning the desired exit code.
///
/// Analysis failures are returned as errors. A rendering or write failure
/// is logged, reported on stderr, and turned into [`exit_codes::ERROR`].
pub fn run_report(app: &AppConfig, options: ReportOptions) -> Result<i32> {
    let pipeline = AnalysisPipeline::from_config(app)?;
    let scored = pipeline.run(&options.input, options.content_type)?;

    let mut config = app.report_config();
    if let Some(title) = options.title {
        config.title = title;
    }
    if options.no_content_dump {
        config.include_content_dump = false;
    }
    config.generated_at = options.generated_at;
    if let Some(path) = options.input.path() {
        config.metadata.input_path = Some(path.display().to_string());
    }

    match PdfReporter::new().save(&scored, &config, &options.output_file) {
        Ok(()) => {
            if !options.quiet {
                eprintln!(
                    "Report saved to {} (score {}/100)",
                    options.output_file.display(),
                    scored.scores.final_score()
                );
            }
            Ok(exit_codes::SUCCESS)
        }
        Err(e) => {
            tracing::error!("Failed to generate PDF report: {}", e);
            eprintln!("Could not generate the PDF report. Please try again.");
            Ok(exit_codes::ERROR)
        }
    }
}
