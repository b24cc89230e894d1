//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod analyze;
mod report;
mod schema;

pub use analyze::{run_analyze, AnalyzeOptions};
pub use report::{run_report, ReportOptions};
pub use schema::{render_schema, run_schema, SchemaOptions};

use crate::config::{AppConfig, Validatable};

/// Reject a configuration with validation errors, logging each one.
pub fn ensure_valid(config: &AppConfig) -> anyhow::Result<()> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    for error in &errors {
        tracing::error!("Invalid configuration: {}", error);
    }
    anyhow::bail!("configuration has {} error(s)", errors.len())
}
