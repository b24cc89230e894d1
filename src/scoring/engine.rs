//! Content scoring engine.
//!
//! Computes the four sub-scores of a [`ScoreSet`] from raw text. Every
//! function here is pure and total: empty or malformed input yields low
//! scores, never an error.

use super::lexicon::LexiconSet;
use super::metrics::{SnippetFeatures, StructureFeatures, TextMetrics};
use crate::model::{clamp_score, round_half_up, ContentType, ScoreSet};

/// Scoring engine version
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// Snippet base score when no content-type condition applies
const SNIPPET_BASE: f64 = 60.0;
/// Structured data base score
const STRUCTURED_BASE: f64 = 50.0;

/// Scorer for text content
#[derive(Debug, Clone, Default)]
pub struct ContentScorer {
    lexicons: LexiconSet,
}

impl ContentScorer {
    /// Create a scorer with the built-in lexicons
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with custom lexicons
    #[must_use]
    pub const fn with_lexicons(lexicons: LexiconSet) -> Self {
        Self { lexicons }
    }

    #[must_use]
    pub const fn lexicons(&self) -> &LexiconSet {
        &self.lexicons
    }

    /// Measure a text, including lexicon matches for the content type.
    #[must_use]
    pub fn measure(&self, text: &str, content_type: ContentType) -> TextMetrics {
        let keyword_count = self.lexicons.for_type(content_type).count_matches(text);
        TextMetrics::measure(text).with_keywords(keyword_count)
    }

    /// Score a text
    pub fn score(&self, text: &str, content_type: ContentType) -> ScoreSet {
        let metrics = self.measure(text, content_type);
        let scores = Self::score_metrics(&metrics, content_type);
        tracing::debug!(
            content_type = %content_type,
            words = metrics.word_count,
            keywords = metrics.keyword_count,
            final_score = scores.final_score(),
            "Scored content"
        );
        scores
    }

    /// Score pre-computed metrics
    pub fn score_metrics(metrics: &TextMetrics, content_type: ContentType) -> ScoreSet {
        ScoreSet::new(
            i64::from(keyword_relevance(metrics.keyword_density, metrics.word_count)),
            i64::from(readability(
                metrics.average_sentence_length,
                metrics.paragraph_count,
                metrics.char_count,
            )),
            i64::from(snippet_optimization(&metrics.snippet, content_type)),
            i64::from(structured_data(&metrics.structure, metrics.char_count)),
        )
    }
}

/// Keyword relevance from density (percent) and word count.
#[must_use]
pub fn keyword_relevance(density: f64, word_count: usize) -> u8 {
    let raw = if density < 0.5 {
        round_half_up(density * 100.0)
    } else if density <= 3.0 {
        round_half_up(70.0 + density * 10.0)
    } else {
        round_half_up(100.0 - (density - 3.0) * 10.0)
    };
    let length_factor = (word_count as f64 / 300.0).clamp(0.5, 1.2);
    clamp_score(raw * length_factor)
}

/// Readability from average sentence length and paragraph density.
#[must_use]
pub fn readability(average_sentence_length: f64, paragraph_count: usize, char_count: usize) -> u8 {
    let sentence_score = if average_sentence_length < 10.0 {
        70.0
    } else if average_sentence_length <= 20.0 {
        100.0
    } else {
        (100.0 - (average_sentence_length - 20.0) * 3.0).max(40.0)
    };

    let ideal_paragraphs = char_count.div_ceil(500);
    let deviation = paragraph_count.abs_diff(ideal_paragraphs) as f64;
    let paragraph_score = (100.0 - deviation * 10.0).clamp(60.0, 100.0);

    clamp_score(0.7 * sentence_score + 0.3 * paragraph_score)
}

/// Snippet optimization from detected formatting.
///
/// A content-type base replaces the default base when its condition holds,
/// then every detected feature adds its bonus on top. The sum can exceed 100
/// before clamping.
#[must_use]
pub fn snippet_optimization(features: &SnippetFeatures, content_type: ContentType) -> u8 {
    let base = match content_type {
        ContentType::Blog if features.has_questions && features.has_lists => 90.0,
        ContentType::Product if features.has_bold => 85.0,
        ContentType::Service if features.has_headings => 80.0,
        _ => SNIPPET_BASE,
    };

    let mut score = base;
    if features.has_questions {
        score += 10.0;
    }
    if features.has_lists {
        score += 8.0;
    }
    if features.has_headings {
        score += 7.0;
    }
    if features.has_bold {
        score += 5.0;
    }
    clamp_score(score.min(100.0))
}

/// Structured data presence from markup markers and length.
#[must_use]
pub fn structured_data(features: &StructureFeatures, char_count: usize) -> u8 {
    let mut score = STRUCTURED_BASE;
    if features.has_schema_markup {
        score += 30.0;
    }
    if features.has_tables {
        score += 15.0;
    }
    if features.has_definition_lists {
        score += 10.0;
    }
    if char_count > 1000 {
        score += 5.0;
    }
    clamp_score(score.min(100.0))
}
