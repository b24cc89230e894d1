//! Analysis collaborators.
//!
//! Scoring is always pure; this module holds the pieces around it that the
//! caller injects:
//!
//! - [`ContentFetcher`]: turns a URL into text to score
//! - [`ContentAnalyzer`]: turns text into an [`AnalysisResult`], either with
//!   the embedded engine ([`LocalAnalyzer`]) or a remote endpoint
//!   ([`RemoteAnalyzer`], behind the `remote` feature)
//!
//! Both analyzers return the same [`AnalysisResult`] shape, so callers never
//! care where scores came from.

mod fetch;
mod local;
#[cfg(feature = "remote")]
mod remote;

pub use fetch::{PlaceholderFetcher, StaticFetcher};
pub use local::LocalAnalyzer;
#[cfg(feature = "remote")]
pub use remote::{RemoteAnalyzer, RemoteAnalyzerConfig};

use crate::error::Result;
use crate::model::{ContentType, Recommendation, ScoreSet};
use serde::{Deserialize, Serialize};

/// Scores and recommendations for one piece of content.
///
/// This is also the remote analyzer's response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub scores: ScoreSet,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

/// Source of text for a URL.
///
/// # Example
///
/// ```
/// use aeo_scorer::analysis::{ContentFetcher, StaticFetcher};
///
/// let fetcher = StaticFetcher::new().with("https://example.com/", "Hello");
/// assert_eq!(fetcher.fetch("https://example.com/").unwrap(), "Hello");
/// ```
pub trait ContentFetcher: Send + Sync {
    /// Obtain the text to analyze for `url`.
    fn fetch(&self, url: &str) -> Result<String>;

    /// Name of this fetcher, for logging
    fn name(&self) -> &'static str;
}

/// Producer of scores and recommendations for text.
pub trait ContentAnalyzer: Send + Sync {
    /// Analyze `content` as the given content type.
    fn analyze(&self, content: &str, content_type: ContentType) -> Result<AnalysisResult>;

    /// Name of this analyzer, for logging
    fn name(&self) -> &'static str;
}
