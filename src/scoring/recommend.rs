//! Recommendation engine.
//!
//! Turns a [`ScoreSet`] into exactly three prioritized [`Recommendation`]s.
//! The weakest categories come first; healthy content gets a fixed set of
//! maintenance suggestions instead.

use crate::model::{
    ContentType, Recommendation, ScoreCategory, ScoreSet, FAIR_THRESHOLD, GOOD_THRESHOLD,
};

/// Number of recommendations always returned
pub const RECOMMENDATION_COUNT: usize = 3;

/// Maintenance suggestions used when every category is healthy, and as padding.
const MAINTENANCE: [(&str, &str); 3] = [
    (
        "Maintain Content Quality",
        "Your content performs well across all categories. Keep it fresh by reviewing facts, statistics and examples on a regular schedule.",
    ),
    (
        "Create Complementary Content",
        "Build related pieces that answer follow-up questions your audience is likely to ask next, and link them together.",
    ),
    (
        "Consider Multimedia Expansion",
        "Add images, diagrams or short videos with descriptive alt text and captions so answer engines can surface your content in more formats.",
    ),
];

/// Build exactly three recommendations for a score set.
///
/// Categories are ranked ascending with ties kept in canonical order, and the
/// three weakest are considered. Each one below 80 yields a category message,
/// severe below 60. If that leaves room, one content-type tip is added, and
/// any remaining slots are filled from the maintenance set.
#[must_use]
pub fn recommend(scores: &ScoreSet, content_type: ContentType) -> Vec<Recommendation> {
    let mut ranked = scores.categories();
    // slice::sort_by_key is stable
    ranked.sort_by_key(|&(_, score)| score);

    if ranked.iter().all(|&(_, score)| score >= GOOD_THRESHOLD) {
        tracing::debug!("All categories healthy, using maintenance recommendations");
        return maintenance();
    }

    let mut recommendations: Vec<Recommendation> = ranked
        .iter()
        .take(RECOMMENDATION_COUNT)
        .filter(|&&(_, score)| score < GOOD_THRESHOLD)
        .map(|&(category, score)| category_message(category, score, content_type))
        .collect();

    if recommendations.len() < RECOMMENDATION_COUNT {
        recommendations.push(content_type_tip(content_type));
    }

    for (title, description) in MAINTENANCE {
        if recommendations.len() >= RECOMMENDATION_COUNT {
            break;
        }
        if recommendations.iter().all(|r| r.title != title) {
            recommendations.push(Recommendation::new(title, description));
        }
    }

    recommendations.truncate(RECOMMENDATION_COUNT);
    recommendations
}

/// Force an externally supplied list to exactly three items.
///
/// Extra items are dropped; missing ones come from [`recommend`] for the same
/// scores, skipping titles already present.
#[must_use]
pub fn normalize(
    mut recommendations: Vec<Recommendation>,
    scores: &ScoreSet,
    content_type: ContentType,
) -> Vec<Recommendation> {
    if recommendations.len() < RECOMMENDATION_COUNT {
        let local = recommend(scores, content_type)
            .into_iter()
            .chain(maintenance());
        for rec in local {
            if recommendations.len() >= RECOMMENDATION_COUNT {
                break;
            }
            if recommendations.iter().all(|r| r.title != rec.title) {
                recommendations.push(rec);
            }
        }
    }
    recommendations.truncate(RECOMMENDATION_COUNT);
    recommendations
}

fn maintenance() -> Vec<Recommendation> {
    MAINTENANCE
        .iter()
        .map(|(title, description)| Recommendation::new(*title, *description))
        .collect()
}

fn category_message(
    category: ScoreCategory,
    score: u8,
    content_type: ContentType,
) -> Recommendation {
    let label = content_type.label();
    let severe = score < FAIR_THRESHOLD;
    match (category, severe) {
        (ScoreCategory::KeywordRelevance, true) => Recommendation::new(
            "Strengthen Keyword Targeting",
            format!(
                "Your {label} rarely uses the terms answer engines associate with its topic. Work the primary keyword and close variations naturally into headings and opening sentences."
            ),
        ),
        (ScoreCategory::KeywordRelevance, false) => Recommendation::new(
            "Refine Keyword Usage",
            format!(
                "Keyword usage in your {label} is close to the ideal range. Balance primary terms with related phrases and avoid repeating the same keyword in consecutive sentences."
            ),
        ),
        (ScoreCategory::Readability, true) => Recommendation::new(
            "Simplify Sentence Structure",
            format!(
                "Sentences in your {label} are hard to follow. Split long sentences, aim for 10 to 20 words each and keep each paragraph to a single idea."
            ),
        ),
        (ScoreCategory::Readability, false) => Recommendation::new(
            "Improve Readability Flow",
            format!(
                "Your {label} reads reasonably well. Vary sentence length and break dense paragraphs into shorter blocks to make scanning easier."
            ),
        ),
        (ScoreCategory::SnippetOptimization, true) => Recommendation::new(
            "Restructure for Featured Answers",
            format!(
                "Answer engines struggle to extract direct answers from your {label}. Add question-based headings followed by concise answers, numbered steps and bulleted lists."
            ),
        ),
        (ScoreCategory::SnippetOptimization, false) => Recommendation::new(
            "Add Answer-Ready Formatting",
            format!(
                "Your {label} has some snippet-friendly structure. Add a short summary under each heading and highlight key facts in bold."
            ),
        ),
        (ScoreCategory::StructuredData, true) => Recommendation::new(
            "Add Structured Data Markup",
            format!(
                "Your {label} lacks machine-readable context. Add Schema.org markup in JSON-LD that describes the page type, author and key entities."
            ),
        ),
        (ScoreCategory::StructuredData, false) => Recommendation::new(
            "Expand Structured Data",
            format!(
                "Your {label} has basic structure. Add tables for comparisons and definition lists for key terms, and extend existing markup with more properties."
            ),
        ),
    }
}

fn content_type_tip(content_type: ContentType) -> Recommendation {
    match content_type {
        ContentType::Blog => Recommendation::new(
            "Add an FAQ Section",
            "Close the post with the questions readers ask most often and answer each in two or three sentences.",
        ),
        ContentType::Product => Recommendation::new(
            "Highlight Product Specifications",
            "Present dimensions, materials and compatibility in a scannable list or table so answer engines can quote them directly.",
        ),
        ContentType::Service => Recommendation::new(
            "Showcase Service Outcomes",
            "Describe concrete results for past clients with numbers, timelines and the problem each engagement solved.",
        ),
        ContentType::Other => Recommendation::new(
            "Answer Common Questions Directly",
            "Identify the questions your audience searches for and answer each one clearly near the top of the page.",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_all_healthy_uses_maintenance_set() {
        let recs = recommend(&ScoreSet::new(80, 90, 100, 85), ContentType::Blog);
        assert_eq!(
            titles(&recs),
            vec![
                "Maintain Content Quality",
                "Create Complementary Content",
                "Consider Multimedia Expansion"
            ]
        );
    }

    #[test]
    fn test_three_weak_categories_worst_first() {
        let recs = recommend(&ScoreSet::new(70, 40, 90, 55), ContentType::Product);
        assert_eq!(
            titles(&recs),
            vec![
                "Simplify Sentence Structure",
                "Add Structured Data Markup",
                "Refine Keyword Usage"
            ]
        );
        assert!(recs[0].description.contains("product description"));
    }

    #[test]
    fn test_ties_keep_canonical_order() {
        let recs = recommend(&ScoreSet::new(50, 50, 50, 50), ContentType::Other);
        assert_eq!(
            titles(&recs),
            vec![
                "Strengthen Keyword Targeting",
                "Simplify Sentence Structure",
                "Restructure for Featured Answers"
            ]
        );
    }

    #[test]
    fn test_single_issue_adds_tip_then_maintenance() {
        let recs = recommend(&ScoreSet::new(90, 90, 65, 90), ContentType::Blog);
        assert_eq!(
            titles(&recs),
            vec![
                "Add Answer-Ready Formatting",
                "Add an FAQ Section",
                "Maintain Content Quality"
            ]
        );
    }

    #[test]
    fn test_two_issues_adds_tip() {
        let recs = recommend(&ScoreSet::new(90, 30, 90, 70), ContentType::Service);
        assert_eq!(
            titles(&recs),
            vec![
                "Simplify Sentence Structure",
                "Expand Structured Data",
                "Showcase Service Outcomes"
            ]
        );
        assert!(recs[0].description.contains("webpage"));
    }

    #[test]
    fn test_severity_boundary() {
        let at_sixty = recommend(&ScoreSet::new(60, 100, 100, 100), ContentType::Blog);
        assert_eq!(at_sixty[0].title, "Refine Keyword Usage");
        let below = recommend(&ScoreSet::new(59, 100, 100, 100), ContentType::Blog);
        assert_eq!(below[0].title, "Strengthen Keyword Targeting");
    }

    #[test]
    fn test_normalize_pads_and_truncates() {
        let scores = ScoreSet::new(90, 90, 90, 90);
        let padded = normalize(
            vec![Recommendation::new("Custom", "")],
            &scores,
            ContentType::Blog,
        );
        assert_eq!(
            titles(&padded),
            vec!["Custom", "Maintain Content Quality", "Create Complementary Content"]
        );

        let many = (0..5)
            .map(|i| Recommendation::new(format!("R{i}"), ""))
            .collect();
        assert_eq!(titles(&normalize(many, &scores, ContentType::Blog)), vec!["R0", "R1", "R2"]);
    }
}
