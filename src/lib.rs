//! **Content scoring for AI answer engines.**
//!
//! `aeo-scorer` estimates how well a piece of content is positioned to be
//! quoted by AI answer engines (AI Engine Optimization, AEO). It scores text
//! on four heuristics, derives three prioritized recommendations, and renders
//! the result as a paginated PDF report.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`ScoreSet`], [`ContentType`] and [`Recommendation`], the
//!   shapes every other module exchanges.
//! - **[`scoring`]**: the pure [`ContentScorer`] and [`recommend`] engines.
//! - **[`reports`]**: the PDF renderer plus JSON and terminal summaries.
//! - **[`analysis`]**: injectable fetchers and analyzers (embedded engine or a
//!   remote endpoint behind the `remote` feature).
//! - **[`pipeline`]**: input resolution and batch analysis for the CLI.
//! - **[`schema`]**: Schema.org JSON-LD helpers.
//! - **[`config`]**: YAML configuration with discovery and validation.
//!
//! ## Getting Started
//!
//! ```
//! use aeo_scorer::{recommend, ContentScorer, ContentType};
//!
//! let text = "What is answer engine optimization?\n\n\
//!             It is the practice of structuring content so AI assistants can quote it.";
//! let scores = ContentScorer::new().score(text, ContentType::Blog);
//! assert!(scores.final_score() <= 100);
//!
//! let recommendations = recommend(&scores, ContentType::Blog);
//! assert_eq!(recommendations.len(), 3);
//! ```
//!
//! ### Rendering a PDF Report
//!
//! ```no_run
//! use aeo_scorer::reports::{PdfReporter, ReportConfig, ScoredContent};
//! use aeo_scorer::{ContentScorer, ContentType};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let text = "Our widget ships with a two year warranty.";
//!     let scores = ContentScorer::new().score(text, ContentType::Product);
//!     let content = ScoredContent::new(scores, text, ContentType::Product);
//!
//!     PdfReporter::new().save(&content, &ReportConfig::default(), Path::new("report.pdf"))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `remote` (default): the HTTP [`analysis::RemoteAnalyzer`], adding `reqwest`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Scores, word counts and millimetre coordinates are bounded
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::similar_names
)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod schema;
pub mod scoring;

// Re-export main types for convenience
pub use analysis::{AnalysisResult, ContentAnalyzer, ContentFetcher, LocalAnalyzer};
pub use config::{AppConfig, ConfigError, Validatable};
pub use error::{AeoError, ErrorContext, OptionContext, Result};
pub use model::{ContentType, Recommendation, ScoreSet, ScoreStatus};
pub use reports::{PdfReporter, ReportConfig, ReportFormat, ReportGenerator, ScoredContent};
pub use scoring::{recommend, ContentScorer};
