//! Score value objects.
//!
//! [`ScoreSet`] is the central value shared by the scoring engine, the
//! recommendation engine, the report renderer and the remote analyzer wire
//! format. The final score is always derived from the four sub-scores.

use serde::{Deserialize, Serialize};

/// Weight of keyword relevance in the final score, in percent
pub const KEYWORD_WEIGHT: u32 = 30;
/// Weight of readability in the final score, in percent
pub const READABILITY_WEIGHT: u32 = 25;
/// Weight of snippet optimization in the final score, in percent
pub const SNIPPET_WEIGHT: u32 = 25;
/// Weight of structured data in the final score, in percent
pub const STRUCTURED_DATA_WEIGHT: u32 = 20;

/// Score at or above which a category is considered healthy
pub const GOOD_THRESHOLD: u8 = 80;
/// Score at or above which a category only needs improvement
pub const FAIR_THRESHOLD: u8 = 60;

/// Round half up, matching the rounding used throughout the scoring formulas.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round a raw formula result and clamp it into `0..=100`.
#[must_use]
pub fn clamp_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    round_half_up(value).clamp(0.0, 100.0) as u8
}

/// One of the four sub-score categories, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreCategory {
    KeywordRelevance,
    Readability,
    SnippetOptimization,
    StructuredData,
}

impl ScoreCategory {
    /// All categories in canonical (report) order
    pub const ALL: [Self; 4] = [
        Self::KeywordRelevance,
        Self::Readability,
        Self::SnippetOptimization,
        Self::StructuredData,
    ];

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::KeywordRelevance => "Keyword Relevance",
            Self::Readability => "Readability",
            Self::SnippetOptimization => "Snippet Optimization",
            Self::StructuredData => "Structured Data",
        }
    }
}

impl std::fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Status label derived from a single score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreStatus {
    /// 80 and above
    Good,
    /// 60 to 79
    NeedsImprovement,
    /// Below 60
    Poor,
}

impl ScoreStatus {
    /// Classify a score
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= GOOD_THRESHOLD {
            Self::Good
        } else if score >= FAIR_THRESHOLD {
            Self::NeedsImprovement
        } else {
            Self::Poor
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Poor => "Poor",
        }
    }

    /// RGB color used for this status in rendered reports
    #[must_use]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Self::Good => (22, 163, 74),
            Self::NeedsImprovement => (202, 138, 4),
            Self::Poor => (220, 38, 38),
        }
    }
}

impl std::fmt::Display for ScoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Four sub-scores plus the derived final score for one piece of content.
///
/// There is no way to set `final_score` directly: construction clamps each
/// sub-score to `0..=100` and computes the weighted final score, and
/// deserialization goes through the same path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ScoreSetWire", into = "ScoreSetOut")]
pub struct ScoreSet {
    keyword_relevance: u8,
    readability: u8,
    snippet_optimization: u8,
    structured_data: u8,
    final_score: u8,
}

impl ScoreSet {
    /// Build a score set from raw sub-scores. Values outside `0..=100` are clamped.
    #[must_use]
    pub fn new(
        keyword_relevance: i64,
        readability: i64,
        snippet_optimization: i64,
        structured_data: i64,
    ) -> Self {
        let kr = keyword_relevance.clamp(0, 100) as u8;
        let rd = readability.clamp(0, 100) as u8;
        let so = snippet_optimization.clamp(0, 100) as u8;
        let sd = structured_data.clamp(0, 100) as u8;
        Self {
            keyword_relevance: kr,
            readability: rd,
            snippet_optimization: so,
            structured_data: sd,
            final_score: Self::weighted(kr, rd, so, sd),
        }
    }

    // Integer percent math so exact halves round up without float error
    fn weighted(kr: u8, rd: u8, so: u8, sd: u8) -> u8 {
        let total = KEYWORD_WEIGHT * u32::from(kr)
            + READABILITY_WEIGHT * u32::from(rd)
            + SNIPPET_WEIGHT * u32::from(so)
            + STRUCTURED_DATA_WEIGHT * u32::from(sd);
        ((total + 50) / 100).min(100) as u8
    }

    #[must_use]
    pub const fn keyword_relevance(&self) -> u8 {
        self.keyword_relevance
    }

    #[must_use]
    pub const fn readability(&self) -> u8 {
        self.readability
    }

    #[must_use]
    pub const fn snippet_optimization(&self) -> u8 {
        self.snippet_optimization
    }

    #[must_use]
    pub const fn structured_data(&self) -> u8 {
        self.structured_data
    }

    #[must_use]
    pub const fn final_score(&self) -> u8 {
        self.final_score
    }

    /// Score for a single category
    #[must_use]
    pub const fn get(&self, category: ScoreCategory) -> u8 {
        match category {
            ScoreCategory::KeywordRelevance => self.keyword_relevance,
            ScoreCategory::Readability => self.readability,
            ScoreCategory::SnippetOptimization => self.snippet_optimization,
            ScoreCategory::StructuredData => self.structured_data,
        }
    }

    /// `(category, score)` pairs in canonical order
    #[must_use]
    pub fn categories(&self) -> [(ScoreCategory, u8); 4] {
        ScoreCategory::ALL.map(|c| (c, self.get(c)))
    }

    /// Status of the overall score
    #[must_use]
    pub const fn status(&self) -> ScoreStatus {
        ScoreStatus::from_score(self.final_score)
    }
}

/// camelCase wire representation accepted from the remote analyzer.
///
/// Scores arrive as JSON numbers that may be fractional or out of range.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScoreSetWire {
    #[serde(default)]
    keyword_relevance: f64,
    #[serde(default)]
    readability: f64,
    #[serde(default)]
    snippet_optimization: f64,
    #[serde(default)]
    structured_data: f64,
}

impl From<ScoreSetWire> for ScoreSet {
    fn from(wire: ScoreSetWire) -> Self {
        Self::new(
            i64::from(clamp_score(wire.keyword_relevance)),
            i64::from(clamp_score(wire.readability)),
            i64::from(clamp_score(wire.snippet_optimization)),
            i64::from(clamp_score(wire.structured_data)),
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreSetOut {
    keyword_relevance: u8,
    readability: u8,
    snippet_optimization: u8,
    structured_data: u8,
    final_score: u8,
}

impl From<ScoreSet> for ScoreSetOut {
    fn from(scores: ScoreSet) -> Self {
        Self {
            keyword_relevance: scores.keyword_relevance,
            readability: scores.readability,
            snippet_optimization: scores.snippet_optimization,
            structured_data: scores.structured_data,
            final_score: scores.final_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_score_is_weighted() {
        let scores = ScoreSet::new(80, 70, 60, 50);
        // 24 + 17.5 + 15 + 10 = 66.5 -> 67
        assert_eq!(scores.final_score(), 67);
    }

    #[test]
    fn test_new_clamps_inputs() {
        let scores = ScoreSet::new(-20, 150, 100, 0);
        assert_eq!(scores.keyword_relevance(), 0);
        assert_eq!(scores.readability(), 100);
        assert_eq!(scores.final_score(), 50);
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(ScoreStatus::from_score(100), ScoreStatus::Good);
        assert_eq!(ScoreStatus::from_score(80), ScoreStatus::Good);
        assert_eq!(ScoreStatus::from_score(79), ScoreStatus::NeedsImprovement);
        assert_eq!(ScoreStatus::from_score(60), ScoreStatus::NeedsImprovement);
        assert_eq!(ScoreStatus::from_score(59), ScoreStatus::Poor);
        assert_eq!(ScoreStatus::from_score(0), ScoreStatus::Poor);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json = serde_json::to_value(ScoreSet::new(10, 20, 30, 40)).unwrap();
        assert_eq!(json["keywordRelevance"], 10);
        assert_eq!(json["structuredData"], 40);
        assert_eq!(json["finalScore"], 24);
    }

    #[test]
    fn test_deserialize_recomputes_final_score() {
        let json = r#"{"keywordRelevance":100,"readability":100,"snippetOptimization":100,"structuredData":100,"finalScore":3}"#;
        let scores: ScoreSet = serde_json::from_str(json).unwrap();
        assert_eq!(scores.final_score(), 100);
    }

    #[test]
    fn test_deserialize_clamps_out_of_range() {
        let json = r#"{"keywordRelevance":140.2,"readability":-3,"snippetOptimization":72.5,"structuredData":50}"#;
        let scores: ScoreSet = serde_json::from_str(json).unwrap();
        assert_eq!(scores.keyword_relevance(), 100);
        assert_eq!(scores.readability(), 0);
        assert_eq!(scores.snippet_optimization(), 73);
    }

    #[test]
    fn test_categories_canonical_order() {
        let scores = ScoreSet::new(1, 2, 3, 4);
        let cats: Vec<_> = scores.categories().iter().map(|(c, _)| *c).collect();
        assert_eq!(cats, ScoreCategory::ALL.to_vec());
    }
}
