//! Embedded analyzer.

use super::{AnalysisResult, ContentAnalyzer};
use crate::error::Result;
use crate::model::ContentType;
use crate::scoring::{recommend, ContentScorer};

/// Analyzer that runs the built-in scoring and recommendation engines.
#[derive(Debug, Clone, Default)]
pub struct LocalAnalyzer {
    scorer: ContentScorer,
}

impl LocalAnalyzer {
    /// Create an analyzer with the built-in lexicons.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer around a configured scorer.
    #[must_use]
    pub const fn with_scorer(scorer: ContentScorer) -> Self {
        Self { scorer }
    }

    #[must_use]
    pub const fn scorer(&self) -> &ContentScorer {
        &self.scorer
    }
}

impl ContentAnalyzer for LocalAnalyzer {
    fn analyze(&self, content: &str, content_type: ContentType) -> Result<AnalysisResult> {
        let scores = self.scorer.score(content, content_type);
        Ok(AnalysisResult {
            recommendations: recommend(&scores, content_type),
            scores,
        })
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_matches_engine() {
        let analyzer = LocalAnalyzer::new();
        let text = "What is answer engine optimization? A short guide.";
        let result = analyzer.analyze(text, ContentType::Blog).unwrap();
        assert_eq!(result.scores, ContentScorer::new().score(text, ContentType::Blog));
        assert_eq!(result.recommendations.len(), 3);
    }

    #[test]
    fn test_local_empty_input_does_not_fail() {
        let result = LocalAnalyzer::new().analyze("", ContentType::Other).unwrap();
        assert_eq!(result.scores.final_score(), 45);
    }
}
