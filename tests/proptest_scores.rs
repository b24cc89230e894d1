//! Property-based tests for scoring, recommendations and report layout.
//!
//! Ensures the engines handle arbitrary text without panicking and that the
//! score and layout invariants hold across random inputs.

use aeo_scorer::model::{ContentType, ScoreSet};
use aeo_scorer::reports::layout::{text_width, MARGIN, PAGE_BREAK_Y, PAGE_WIDTH};
use aeo_scorer::reports::{render_report, ReportConfig};
use aeo_scorer::scoring::{recommend, ContentScorer, RECOMMENDATION_COUNT};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

fn content_type() -> impl Strategy<Value = ContentType> {
    prop_oneof![
        Just(ContentType::Blog),
        Just(ContentType::Product),
        Just(ContentType::Service),
        Just(ContentType::Other),
    ]
}

fn expected_final(scores: &ScoreSet) -> u32 {
    let total = 30 * u32::from(scores.keyword_relevance())
        + 25 * u32::from(scores.readability())
        + 25 * u32::from(scores.snippet_optimization())
        + 20 * u32::from(scores.structured_data());
    (total + 50) / 100
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn scores_stay_in_range(text in "\\PC{0,400}", ct in content_type()) {
        let scores = ContentScorer::new().score(&text, ct);
        for (_, score) in scores.categories() {
            prop_assert!(score <= 100);
        }
        prop_assert!(scores.final_score() <= 100);
        prop_assert_eq!(u32::from(scores.final_score()), expected_final(&scores));
    }

    #[test]
    fn markdown_like_text_stays_in_range(
        lines in prop::collection::vec("(#{1,3} |- |\\* |\\| |1\\. )?[A-Za-z ?*|]{0,60}", 0..30),
        ct in content_type(),
    ) {
        let text = lines.join("\n");
        let scores = ContentScorer::new().score(&text, ct);
        prop_assert!(scores.final_score() <= 100);
        prop_assert_eq!(u32::from(scores.final_score()), expected_final(&scores));
    }

    #[test]
    fn score_set_clamps(
        kr in -500i64..500,
        rd in -500i64..500,
        so in -500i64..500,
        sd in -500i64..500,
    ) {
        let scores = ScoreSet::new(kr, rd, so, sd);
        prop_assert_eq!(i64::from(scores.keyword_relevance()), kr.clamp(0, 100));
        prop_assert_eq!(i64::from(scores.readability()), rd.clamp(0, 100));
        prop_assert_eq!(i64::from(scores.snippet_optimization()), so.clamp(0, 100));
        prop_assert_eq!(i64::from(scores.structured_data()), sd.clamp(0, 100));
        prop_assert_eq!(u32::from(scores.final_score()), expected_final(&scores));
    }

    #[test]
    fn always_three_unique_recommendations(
        kr in 0i64..=100,
        rd in 0i64..=100,
        so in 0i64..=100,
        sd in 0i64..=100,
        ct in content_type(),
    ) {
        let recs = recommend(&ScoreSet::new(kr, rd, so, sd), ct);
        prop_assert_eq!(recs.len(), RECOMMENDATION_COUNT);
        let mut titles: Vec<_> = recs.iter().map(|r| r.title.as_str()).collect();
        titles.sort_unstable();
        titles.dedup();
        prop_assert_eq!(titles.len(), RECOMMENDATION_COUNT);
    }
}

proptest! {
    // Layout runs are heavier; fewer cases keep the suite fast.
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn layout_invariants_hold(
        label in "\\PC{0,800}",
        footer in "[A-Za-z0-9 .,-]{0,400}",
        kr in 0i64..=100,
        sd in 0i64..=100,
        ct in content_type(),
    ) {
        let config = ReportConfig {
            footer,
            ..ReportConfig::default().at(Utc.with_ymd_and_hms(2023, 6, 15, 9, 30, 0).unwrap())
        };
        let doc = render_report(&ScoreSet::new(kr, 50, 50, sd), &label, ct, &config);
        prop_assert!(doc.page_count() >= 2);

        let right_edge = PAGE_WIDTH - MARGIN + 0.01;
        let footer_lines = doc.footer_lines();
        for page in &doc.pages {
            let mut footers = Vec::new();
            for (text, x, y, style) in page.texts() {
                prop_assert!(x + text_width(text, style) <= right_edge, "'{}' overflows", text);
                if y > PAGE_BREAK_Y {
                    footers.push(text.to_string());
                }
            }
            prop_assert_eq!(&footers, &footer_lines);
        }
    }
}
