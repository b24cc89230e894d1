//! Fetch, analyze and package content for reporters.

use super::input::InputSource;
use crate::analysis::{ContentAnalyzer, ContentFetcher, LocalAnalyzer, PlaceholderFetcher};
use crate::config::{AnalyzerMode, AppConfig};
use crate::error::{ErrorContext, Result};
use crate::model::ContentType;
use crate::reports::ScoredContent;
use crate::scoring::ContentScorer;
use rayon::prelude::*;

/// Resolves inputs and runs them through an analyzer.
pub struct AnalysisPipeline {
    fetcher: Box<dyn ContentFetcher>,
    analyzer: Box<dyn ContentAnalyzer>,
    scorer: ContentScorer,
    include_metrics: bool,
}

impl AnalysisPipeline {
    /// Build a pipeline from explicit collaborators.
    #[must_use]
    pub fn new(fetcher: Box<dyn ContentFetcher>, analyzer: Box<dyn ContentAnalyzer>) -> Self {
        Self {
            fetcher,
            analyzer,
            scorer: ContentScorer::new(),
            include_metrics: false,
        }
    }

    /// Build the pipeline described by the configuration.
    ///
    /// Remote mode needs the `remote` feature and an endpoint.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let scorer = ContentScorer::with_lexicons(config.lexicons());
        let analyzer: Box<dyn ContentAnalyzer> = match config.analyzer.mode {
            AnalyzerMode::Local => Box::new(LocalAnalyzer::with_scorer(scorer.clone())),
            AnalyzerMode::Remote => build_remote(config)?,
        };
        tracing::debug!("Using {} analyzer", analyzer.name());
        Ok(Self {
            fetcher: Box::new(PlaceholderFetcher::new()),
            analyzer,
            scorer,
            include_metrics: false,
        })
    }

    /// Attach raw text metrics to each result.
    #[must_use]
    pub const fn with_metrics(mut self, include_metrics: bool) -> Self {
        self.include_metrics = include_metrics;
        self
    }

    /// Analyze one input.
    pub fn run(&self, input: &InputSource, content_type: ContentType) -> Result<ScoredContent> {
        tracing::info!("Analyzing {} as {}", input.display_name(), content_type);
        let descriptor = input.resolve(self.fetcher.as_ref(), content_type)?;
        let result = self
            .analyzer
            .analyze(&descriptor.raw_text, content_type)
            .with_context(|| format!("analyzing {}", input.display_name()))?;

        let mut scored = ScoredContent::new(result.scores, descriptor.source_label, content_type)
            .with_recommendations(result.recommendations);
        if self.include_metrics {
            scored = scored.with_metrics(self.scorer.measure(&descriptor.raw_text, content_type));
        }
        tracing::debug!(
            "{}: final score {}",
            input.display_name(),
            scored.scores.final_score()
        );
        Ok(scored)
    }

    /// Analyze several inputs in parallel. Results keep input order.
    pub fn run_all(
        &self,
        inputs: &[InputSource],
        content_type: ContentType,
    ) -> Vec<Result<ScoredContent>> {
        inputs
            .par_iter()
            .map(|input| self.run(input, content_type))
            .collect()
    }
}

#[cfg(feature = "remote")]
fn build_remote(config: &AppConfig) -> Result<Box<dyn ContentAnalyzer>> {
    use crate::analysis::{RemoteAnalyzer, RemoteAnalyzerConfig};
    use crate::error::OptionContext;
    use std::time::Duration;

    let remote = RemoteAnalyzerConfig {
        endpoint: config
            .analyzer
            .endpoint
            .clone()
            .context_none("analyzer.endpoint is required in remote mode")?,
        api_key: config.analyzer.api_key(),
        timeout: Duration::from_secs(config.analyzer.timeout_secs),
        max_retries: config.analyzer.max_retries,
    };
    Ok(Box::new(RemoteAnalyzer::new(remote)?))
}

#[cfg(not(feature = "remote"))]
fn build_remote(_config: &AppConfig) -> Result<Box<dyn ContentAnalyzer>> {
    use crate::error::{AeoError, AnalysisErrorKind};

    Err(AeoError::analysis(
        "creating remote analyzer",
        AnalysisErrorKind::NotConfigured("built without the 'remote' feature".to_string()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisResult, StaticFetcher};
    use crate::error::{AeoError, AnalysisErrorKind};

    struct FailingAnalyzer;

    impl ContentAnalyzer for FailingAnalyzer {
        fn analyze(&self, _content: &str, _content_type: ContentType) -> Result<AnalysisResult> {
            Err(AeoError::analysis(
                "test",
                AnalysisErrorKind::ApiError("unavailable".to_string()),
            ))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn pipeline() -> AnalysisPipeline {
        AnalysisPipeline::new(
            Box::new(StaticFetcher::new().with("https://a.test/", "What is AEO? A guide.")),
            Box::new(LocalAnalyzer::new()),
        )
    }

    #[test]
    fn test_run_text() {
        let scored = pipeline()
            .run(&InputSource::Text(String::new()), ContentType::Other)
            .unwrap();
        assert_eq!(scored.scores.final_score(), 45);
        assert_eq!(scored.recommendations.len(), 3);
        assert!(scored.metrics.is_none());
    }

    #[test]
    fn test_run_url_uses_fetcher() {
        let scored = pipeline()
            .with_metrics(true)
            .run(&InputSource::Url("https://a.test/".to_string()), ContentType::Blog)
            .unwrap();
        assert_eq!(scored.source_label, "https://a.test/");
        assert_eq!(
            scored.scores,
            ContentScorer::new().score("What is AEO? A guide.", ContentType::Blog)
        );
        assert!(scored.metrics.is_some());
    }

    #[test]
    fn test_run_all_keeps_order_and_errors() {
        let inputs = [
            InputSource::Text("one".to_string()),
            InputSource::Url("https://missing.test/".to_string()),
            InputSource::Text("three".to_string()),
        ];
        let results = pipeline().run_all(&inputs, ContentType::Other);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().source_label, "one");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().source_label, "three");
    }

    #[test]
    fn test_analyzer_failure_propagates() {
        let pipeline =
            AnalysisPipeline::new(Box::new(StaticFetcher::new()), Box::new(FailingAnalyzer));
        let err = pipeline
            .run(&InputSource::Text("x".to_string()), ContentType::Other)
            .unwrap_err();
        match err {
            AeoError::Analysis { context, .. } => assert_eq!(context, "analyzing <text>: test"),
            other => panic!("Expected Analysis error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_config_remote_without_endpoint_fails() {
        let mut config = AppConfig::default();
        config.analyzer.mode = AnalyzerMode::Remote;
        let err = AnalysisPipeline::from_config(&config).err().unwrap();
        if cfg!(feature = "remote") {
            assert!(matches!(err, AeoError::Validation(msg) if msg.contains("analyzer.endpoint")));
        } else {
            assert!(matches!(err, AeoError::Analysis { .. }));
        }
    }
}
