//! Integration tests for the scoring and recommendation engines.

use aeo_scorer::config::AppConfig;
use aeo_scorer::model::{ContentType, ScoreSet, ScoreStatus};
use aeo_scorer::scoring::{
    recommend, ContentScorer, BLOG_TERMS, OTHER_TERMS, PRODUCT_TERMS, RECOMMENDATION_COUNT,
    SERVICE_TERMS,
};

const ARTICLE: &str = "# What is Answer Engine Optimization?

Answer engine optimization (AEO) is the practice of shaping content so AI assistants can quote it. \
It builds on SEO but favors direct answers.

## Why does it matter?

- Assistants answer questions without a click
- Clear structure helps them find the answer
- **Concise** paragraphs are easier to cite

| Term | Meaning |
| --- | --- |
| AEO | Optimizing for answer engines |
";

// ============================================================================
// Fixed Scenarios
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn test_repeated_short_sentence_is_keyword_stuffed() {
        let scores =
            ContentScorer::new().score("AI is great. AI is great. AI is great.", ContentType::Blog);
        assert_eq!(scores.keyword_relevance(), 0);
    }

    #[test]
    fn test_empty_text_baseline() {
        let scores = ContentScorer::new().score("", ContentType::Other);
        assert_eq!(scores, ScoreSet::new(0, 79, 60, 50));
        assert_eq!(scores.final_score(), 45);
        assert_eq!(scores.status(), ScoreStatus::Poor);
    }
}

// ============================================================================
// Engine Behavior
// ============================================================================

mod engine {
    use super::*;

    #[test]
    fn test_scoring_is_deterministic() {
        let scorer = ContentScorer::new();
        let first = scorer.score(ARTICLE, ContentType::Blog);
        for _ in 0..5 {
            assert_eq!(scorer.score(ARTICLE, ContentType::Blog), first);
        }
    }

    #[test]
    fn test_structured_article_beats_empty_text() {
        let scorer = ContentScorer::new();
        let article = scorer.score(ARTICLE, ContentType::Blog);
        let empty = scorer.score("", ContentType::Blog);
        assert!(article.final_score() > empty.final_score());
        assert!(article.snippet_optimization() > empty.snippet_optimization());
        assert!(article.structured_data() > empty.structured_data());
    }

    #[test]
    fn test_content_type_changes_lexicon() {
        let scorer = ContentScorer::new();
        let text = "Our widget ships with a warranty. Check pricing and features for each widget.";
        assert_eq!(scorer.measure(text, ContentType::Product).keyword_count, 2);
        assert_eq!(scorer.measure(text, ContentType::Blog).keyword_count, 0);
    }

    #[test]
    fn test_configured_lexicon_override() {
        let text = "Zephyr kites fly well. Zephyr kites are light.";
        let mut config = AppConfig::default();
        config
            .scoring
            .lexicons
            .insert("other".to_string(), vec!["zephyr".to_string()]);

        let custom = ContentScorer::with_lexicons(config.lexicons());
        assert_eq!(custom.measure(text, ContentType::Other).keyword_count, 2);
        assert_eq!(
            ContentScorer::new().measure(text, ContentType::Other).keyword_count,
            0
        );
    }

    fn assert_in_bounds(scores: &ScoreSet) {
        for (category, score) in scores.categories() {
            assert!(score <= 100, "{category:?} = {score}");
        }
        let weighted = 30 * u32::from(scores.keyword_relevance())
            + 25 * u32::from(scores.readability())
            + 25 * u32::from(scores.snippet_optimization())
            + 20 * u32::from(scores.structured_data());
        assert_eq!(u32::from(scores.final_score()), (weighted + 50) / 100);
    }

    #[test]
    fn test_very_long_texts_stay_in_range() {
        let every_term: Vec<&str> = [BLOG_TERMS, PRODUCT_TERMS, SERVICE_TERMS, OTHER_TERMS]
            .concat();
        let mut keyword_dense = String::new();
        while keyword_dense.len() < 20_000 {
            keyword_dense.push_str(&every_term.join(" "));
            keyword_dense.push_str(". ");
        }
        let mut markdown = String::new();
        while markdown.len() < 20_000 {
            markdown.push_str(ARTICLE);
            markdown.push_str("\n<script type=\"application/ld+json\">{}</script>\n");
        }
        let run_on = "word ".repeat(4_000);

        let scorer = ContentScorer::new();
        for text in [&keyword_dense, &markdown, &run_on] {
            assert!(text.chars().count() > 10_000);
            for content_type in ContentType::ALL {
                assert_in_bounds(&scorer.score(text, content_type));
            }
        }
    }

    #[test]
    fn test_metrics_match_scores() {
        let scorer = ContentScorer::new();
        let metrics = scorer.measure(ARTICLE, ContentType::Blog);
        assert_eq!(
            ContentScorer::score_metrics(&metrics, ContentType::Blog),
            scorer.score(ARTICLE, ContentType::Blog)
        );
    }
}

// ============================================================================
// Recommendation Contract
// ============================================================================

mod recommendations {
    use super::*;

    #[test]
    fn test_always_three() {
        let scorer = ContentScorer::new();
        for text in ["", "AI is great.", ARTICLE] {
            for ct in ContentType::ALL {
                let recs = recommend(&scorer.score(text, ct), ct);
                assert_eq!(recs.len(), RECOMMENDATION_COUNT);
            }
        }
    }

    #[test]
    fn test_titles_unique() {
        for scores in [
            ScoreSet::new(90, 90, 65, 90),
            ScoreSet::new(100, 100, 100, 100),
            ScoreSet::new(0, 0, 0, 0),
        ] {
            let recs = recommend(&scores, ContentType::Service);
            let mut titles: Vec<_> = recs.iter().map(|r| r.title.as_str()).collect();
            titles.sort_unstable();
            titles.dedup();
            assert_eq!(titles.len(), 3);
        }
    }

    #[test]
    fn test_weakest_category_leads() {
        let recs = recommend(&ScoreSet::new(85, 85, 85, 20), ContentType::Blog);
        assert_eq!(recs[0].title, "Add Structured Data Markup");
    }
}
