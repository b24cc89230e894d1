//! Analyze command handler.
//!
//! Implements the `analyze` subcommand: score one or more inputs and print
//! the results.

use crate::config::{AppConfig, OutputConfig};
use crate::model::ContentType;
use crate::pipeline::{
    auto_detect_format, exit_codes, should_use_color, write_output, AnalysisPipeline,
    InputSource, OutputTarget,
};
use crate::reports::{create_reporter_with_options, ScoredContent};
use anyhow::{bail, Result};

/// Options for the `analyze` command
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Inputs in report order
    pub inputs: Vec<InputSource>,
    pub content_type: ContentType,
    pub output: OutputConfig,
    /// Include raw text metrics in the output
    pub metrics: bool,
    /// Exit with [`exit_codes::BELOW_THRESHOLD`] when any final score is lower
    pub min_score: Option<u8>,
    pub quiet: bool,
}

/// Run the analyze command, returning the desired exit code.
pub fn run_analyze(app: &AppConfig, options: AnalyzeOptions) -> Result<i32> {
    if options.inputs.is_empty() {
        bail!("Nothing to analyze: pass one or more FILES, --text or --url");
    }

    let pipeline = AnalysisPipeline::from_config(app)?.with_metrics(options.metrics);
    let results = pipeline.run_all(&options.inputs, options.content_type);

    let mut scored: Vec<ScoredContent> = Vec::with_capacity(results.len());
    let mut failures = 0usize;
    for (input, result) in options.inputs.iter().zip(results) {
        match result {
            Ok(content) => scored.push(content),
            Err(e) => {
                failures += 1;
                tracing::error!("Failed to analyze {}: {}", input.display_name(), e);
            }
        }
    }

    if scored.is_empty() {
        return Ok(exit_codes::ERROR);
    }

    let target = OutputTarget::from_option(options.output.file.clone());
    let format = auto_detect_format(options.output.format, &target);
    let reporter =
        create_reporter_with_options(format, should_use_color(options.output.no_color));

    let mut report_config = app.report_config();
    if let [InputSource::File(path)] = options.inputs.as_slice() {
        report_config.metadata.input_path = Some(path.display().to_string());
    }

    let bytes = if let [single] = scored.as_slice() {
        reporter.generate_report(single, &report_config)?
    } else {
        reporter.generate_batch_report(&scored, &report_config)?
    };
    write_output(&bytes, &target, options.quiet)?;

    Ok(determine_exit_code(&scored, failures, options.min_score))
}

/// Errors take precedence over threshold failures.
fn determine_exit_code(scored: &[ScoredContent], failures: usize, min_score: Option<u8>) -> i32 {
    if failures > 0 {
        return exit_codes::ERROR;
    }
    let below = min_score.map_or(0, |min| {
        scored
            .iter()
            .filter(|c| c.scores.final_score() < min)
            .count()
    });
    if below > 0 {
        tracing::warn!(
            "{} of {} input(s) scored below {}",
            below,
            scored.len(),
            min_score.unwrap_or_default()
        );
        exit_codes::BELOW_THRESHOLD
    } else {
        exit_codes::SUCCESS
    }
}
