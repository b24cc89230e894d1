//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, ScoredContent};
use crate::model::{ScoreStatus, SourceKind};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn status_color(status: ScoreStatus) -> &'static str {
    match status {
        ScoreStatus::Good => "green",
        ScoreStatus::NeedsImprovement => "yellow",
        ScoreStatus::Poor => "red",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn lines(&self, content: &ScoredContent) -> Vec<String> {
        let mut lines = Vec::new();
        let scores = &content.scores;

        lines.push(self.color("AEO Content Score", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {}",
            self.color("Source:", "cyan"),
            SourceKind::classify(&content.source_label).describe()
        ));
        lines.push(format!(
            "{}    {}",
            self.color("Type:", "cyan"),
            content.content_type.display_name()
        ));

        let status = scores.status();
        lines.push(format!(
            "{}   {} ({})",
            self.color("Score:", "cyan"),
            self.color(&format!("{}/100", scores.final_score()), status_color(status)),
            status.label()
        ));

        lines.push(String::new());
        lines.push(self.color("Breakdown:", "bold"));
        for (category, score) in scores.categories() {
            let status = ScoreStatus::from_score(score);
            lines.push(format!(
                "  {:<22} {}  {}",
                category.name(),
                self.color(&format!("{score:>3}/100"), status_color(status)),
                self.color(status.label(), "dim")
            ));
        }

        if let Some(metrics) = &content.metrics {
            lines.push(String::new());
            lines.push(self.color("Metrics:", "bold"));
            lines.push(format!(
                "  {} words, {} sentences, {} paragraphs",
                metrics.word_count, metrics.sentence_count, metrics.paragraph_count
            ));
            lines.push(format!(
                "  {} keyword matches ({:.2}% density), {:.1} words/sentence",
                metrics.keyword_count, metrics.keyword_density, metrics.average_sentence_length
            ));
        }

        lines.push(String::new());
        lines.push(self.color("Recommendations:", "bold"));
        for (i, rec) in content.recommendations.iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, self.color(&rec.title, "bold")));
            if !rec.description.is_empty() {
                lines.push(format!("     {}", rec.description));
            }
        }
        lines
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_report(
        &self,
        content: &ScoredContent,
        _config: &ReportConfig,
    ) -> Result<Vec<u8>, ReportError> {
        let mut text = self.lines(content).join("\n");
        text.push('\n');
        Ok(text.into_bytes())
    }

    fn generate_batch_report(
        &self,
        contents: &[ScoredContent],
        _config: &ReportConfig,
    ) -> Result<Vec<u8>, ReportError> {
        let mut blocks: Vec<String> = contents
            .iter()
            .map(|content| self.lines(content).join("\n"))
            .collect();

        if contents.len() > 1 {
            let total: u32 = contents
                .iter()
                .map(|c| u32::from(c.scores.final_score()))
                .sum();
            let average = f64::from(total) / contents.len() as f64;
            blocks.push(format!(
                "{}  {} files, average score {average:.1}",
                self.color("Total:", "bold"),
                contents.len()
            ));
        }

        let mut text = blocks.join("\n\n");
        text.push('\n');
        Ok(text.into_bytes())
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentType, ScoreSet};

    #[test]
    fn test_summary_without_color() {
        let content =
            ScoredContent::new(ScoreSet::new(90, 85, 100, 80), "Pasted text", ContentType::Blog);
        let bytes = SummaryReporter::new()
            .no_color()
            .generate_report(&content, &ReportConfig::default())
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(!text.contains("\x1b["));
        assert!(text.contains("Source:  Pasted text"));
        assert!(text.contains("1. Maintain Content Quality"));
        assert!(text.contains("Snippet Optimization"));
    }

    #[test]
    fn test_batch_summary_has_total() {
        let contents = vec![
            ScoredContent::new(ScoreSet::new(50, 50, 50, 50), "a", ContentType::Other),
            ScoredContent::new(ScoreSet::new(70, 70, 70, 70), "b", ContentType::Other),
        ];
        let bytes = SummaryReporter::new()
            .no_color()
            .generate_batch_report(&contents, &ReportConfig::default())
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("2 files, average score 60.0"));
    }
}
