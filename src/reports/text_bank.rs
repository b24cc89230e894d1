//! Static report text.
//!
//! Explanations are fixed per category and must stay word-for-word stable:
//! downstream consumers compare rendered reports against them.

use crate::model::{ScoreCategory, GOOD_THRESHOLD};

/// Fixed explanation paragraph for a category
#[must_use]
pub const fn explanation(category: ScoreCategory) -> &'static str {
    match category {
        ScoreCategory::KeywordRelevance => {
            "Keyword relevance measures how well your content uses the terms and phrases that AI answer engines associate with your topic. Content with a natural density of relevant keywords is easier for AI systems to match with user queries, while too few keywords make the topic unclear and too many can appear manipulative."
        }
        ScoreCategory::Readability => {
            "Readability evaluates how easily both people and AI systems can process your content. It considers average sentence length and how the text is divided into paragraphs. Clear, well-structured writing is more likely to be summarized accurately and quoted in AI-generated answers."
        }
        ScoreCategory::SnippetOptimization => {
            "Snippet optimization assesses how well your content is formatted for extraction as a direct answer. Question-based phrasing, numbered and bulleted lists, descriptive headings and highlighted key facts all make it easier for answer engines to pull concise responses from your page."
        }
        ScoreCategory::StructuredData => {
            "Structured data measures the presence of machine-readable context such as Schema.org markup, tables and definition lists. Structured information helps AI systems understand the entities, relationships and facts in your content and increases the chance of it appearing in rich results."
        }
    }
}

/// Three remediation items for a category that scores below 80
#[must_use]
pub const fn improvement_actions(category: ScoreCategory) -> [&'static str; 3] {
    match category {
        ScoreCategory::KeywordRelevance => [
            "Identify the primary questions your audience asks and include those exact phrases in headings and opening sentences.",
            "Use related terms and synonyms to build topical depth instead of repeating a single keyword.",
            "Keep keyword density between 0.5% and 3% so the topic is clear without appearing over-optimized.",
        ],
        ScoreCategory::Readability => [
            "Aim for an average sentence length of 10 to 20 words and split sentences that carry more than one idea.",
            "Break long sections into paragraphs of roughly 500 characters, each focused on a single point.",
            "Replace jargon with plain language and define technical terms the first time they appear.",
        ],
        ScoreCategory::SnippetOptimization => [
            "Add question-style headings followed immediately by a concise one or two sentence answer.",
            "Present steps, options and comparisons as numbered or bulleted lists.",
            "Highlight the key facts and definitions in bold so they stand out as quotable answers.",
        ],
        ScoreCategory::StructuredData => [
            "Implement Schema.org markup (JSON-LD) that describes the page type, author and main entities.",
            "Use tables for comparisons, specifications and pricing so data can be extracted reliably.",
            "Add definition lists or glossary sections for the key terms your content explains.",
        ],
    }
}

/// Generic items for a category that already scores 80 or above
#[must_use]
pub const fn maintenance_actions(category: ScoreCategory) -> [&'static str; 3] {
    [
        "Continue monitoring this score as you update the content.",
        match category {
            ScoreCategory::KeywordRelevance => {
                "Expand coverage to closely related topics and long-tail questions."
            }
            ScoreCategory::Readability => {
                "Expand with examples and summaries while keeping the same clear style."
            }
            ScoreCategory::SnippetOptimization => {
                "Expand your question-and-answer sections to cover new follow-up questions."
            }
            ScoreCategory::StructuredData => {
                "Expand existing markup with additional properties as new Schema.org types become relevant."
            }
        },
        "Review performance in AI-generated answers periodically and adjust as search behavior changes.",
    ]
}

/// Action items for a category at a given score
#[must_use]
pub const fn action_items(category: ScoreCategory, score: u8) -> [&'static str; 3] {
    if score < GOOD_THRESHOLD {
        improvement_actions(category)
    } else {
        maintenance_actions(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_data_items_below_threshold() {
        let items = action_items(ScoreCategory::StructuredData, 55);
        assert!(items[0].starts_with("Implement Schema.org markup"));
        assert_eq!(items, improvement_actions(ScoreCategory::StructuredData));
    }

    #[test]
    fn test_generic_items_at_threshold() {
        for category in ScoreCategory::ALL {
            let items = action_items(category, 80);
            assert!(items[0].starts_with("Continue monitoring"));
            assert!(items[1].starts_with("Expand"));
        }
    }

    #[test]
    fn test_every_category_has_explanation() {
        for category in ScoreCategory::ALL {
            assert!(!explanation(category).is_empty());
        }
    }
}
