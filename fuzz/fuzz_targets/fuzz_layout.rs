#![no_main]
use aeo_scorer::model::{ContentType, ScoreSet};
use aeo_scorer::reports::layout::PAGE_BREAK_Y;
use aeo_scorer::reports::{render_report, ReportConfig};
use libfuzzer_sys::fuzz_target;

/// Fuzz report layout with arbitrary source labels.
fuzz_target!(|data: &[u8]| {
    if let Ok(label) = std::str::from_utf8(data) {
        let doc = render_report(
            &ScoreSet::new(50, 50, 50, 50),
            label,
            ContentType::Other,
            &ReportConfig::default(),
        );
        let footer_lines = doc.footer_lines();
        for page in &doc.pages {
            for (text, _, y, _) in page.texts() {
                assert!(y <= PAGE_BREAK_Y || footer_lines.iter().any(|l| l == text));
            }
        }
    }
});
