//! Content scoring and recommendation engine.
//!
//! Scores raw text for how well answer engines can understand and quote it.
//! Four heuristic sub-scores are combined into a weighted final score:
//!
//! - **Keyword relevance** (30%): lexicon term density for the content type
//! - **Readability** (25%): sentence length and paragraph density
//! - **Snippet optimization** (25%): questions, lists, headings, emphasis
//! - **Structured data** (20%): schema markup, tables, definition lists
//!
//! Scoring is pure and deterministic. Empty or malformed input yields low
//! scores rather than errors.
//!
//! # Usage
//!
//! ```
//! use aeo_scorer::model::ContentType;
//! use aeo_scorer::scoring::{recommend, ContentScorer};
//!
//! let scorer = ContentScorer::new();
//! let scores = scorer.score("What is AEO? A short guide.", ContentType::Blog);
//! let recommendations = recommend(&scores, ContentType::Blog);
//!
//! println!("Final score: {}/100", scores.final_score());
//! assert_eq!(recommendations.len(), 3);
//! ```

mod engine;
mod lexicon;
mod metrics;
mod recommend;

pub use engine::{
    keyword_relevance, readability, snippet_optimization, structured_data, ContentScorer,
    SCORING_ENGINE_VERSION,
};
pub use lexicon::{Lexicon, LexiconSet, BLOG_TERMS, OTHER_TERMS, PRODUCT_TERMS, SERVICE_TERMS};
pub use metrics::{
    count_paragraphs, count_sentences, count_words, SnippetFeatures, StructureFeatures,
    TextMetrics,
};
pub use recommend::{normalize, recommend, RECOMMENDATION_COUNT};
