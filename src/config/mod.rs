//! Configuration for aeo-scorer.
//!
//! - Type-safe configuration structures with defaults
//! - Field-level validation
//! - YAML config file loading and discovery
//!
//! # Configuration File
//!
//! Place a `.aeo-scorer.yaml` file in your project root or
//! `~/.config/aeo-scorer/`:
//!
//! ```yaml
//! report:
//!   title: Quarterly Content Audit
//! analyzer:
//!   mode: remote
//!   endpoint: https://analysis.example.com/v1/score
//! scoring:
//!   lexicons:
//!     product: [widget, warranty, pricing]
//! ```
//!
//! CLI arguments always override file settings.

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_API_KEY_ENV, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS, MAX_RETRIES_LIMIT,
};
pub use types::{
    AnalyzerConfig, AnalyzerMode, AppConfig, OutputConfig, ReportSettings, ScoringConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the configuration file format.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
