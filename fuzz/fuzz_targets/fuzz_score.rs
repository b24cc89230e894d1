#![no_main]
use aeo_scorer::model::ContentType;
use aeo_scorer::scoring::{recommend, ContentScorer};
use libfuzzer_sys::fuzz_target;

/// Fuzz the scoring engine.
///
/// The first byte selects the content type; the rest is scored as UTF-8 text
/// under every heuristic, then fed to the recommendation engine.
fuzz_target!(|data: &[u8]| {
    let Some((selector, rest)) = data.split_first() else {
        return;
    };
    if let Ok(text) = std::str::from_utf8(rest) {
        let ct = ContentType::ALL[usize::from(*selector) % ContentType::ALL.len()];
        let scores = ContentScorer::new().score(text, ct);
        assert!(scores.final_score() <= 100);
        assert_eq!(recommend(&scores, ct).len(), 3);
    }
});
