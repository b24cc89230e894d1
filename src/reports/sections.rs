//! Report section builders.
//!
//! Sections are always emitted in this order: header, source, overall score,
//! score breakdown, recommendations, detailed analysis (new page), analyzed
//! content (new page) and finally the footer stamped on every page.

use super::layout::{
    Block, Element, LayoutBuilder, LayoutDocument, TextStyle, ACCENT, CONTENT_WIDTH, DARK_GRAY,
    GRAY, LIGHT_GRAY, MARGIN,
};
use super::text_bank;
use super::types::{ReportConfig, ScoredContent};
use crate::model::{truncate_chars, ContentType, ScoreSet, ScoreStatus, SourceKind};

/// Characters of pasted text reproduced on the analyzed-content page
pub const CONTENT_DUMP_CHARS: usize = 500;

const TITLE: TextStyle = TextStyle::bold(22.0).color(DARK_GRAY);
const SECTION: TextStyle = TextStyle::bold(14.0).color(ACCENT);
const SUBSECTION: TextStyle = TextStyle::bold(12.0);
const BODY: TextStyle = TextStyle::regular(10.0);
const BODY_BOLD: TextStyle = TextStyle::bold(10.0);
const SMALL: TextStyle = TextStyle::regular(9.0).color(GRAY);

const SCORE_BOX_HEIGHT: f32 = 32.0;
const TABLE_ROW_HEIGHT: f32 = 8.0;
const SCORE_COLUMN: f32 = 95.0;
const STATUS_COLUMN: f32 = 130.0;

/// Lay out a report for a score set, deriving recommendations locally.
#[must_use]
pub fn render_report(
    scores: &ScoreSet,
    source_label: &str,
    content_type: ContentType,
    config: &ReportConfig,
) -> LayoutDocument {
    render_content(&ScoredContent::new(*scores, source_label, content_type), config)
}

/// Lay out a report for already analyzed content.
#[must_use]
pub fn render_content(content: &ScoredContent, config: &ReportConfig) -> LayoutDocument {
    let source = SourceKind::classify(&content.source_label);
    let mut builder = LayoutBuilder::new();

    header(&mut builder, config);
    source_section(&mut builder, &source, content.content_type, config);
    overall_score(&mut builder, &content.scores);
    score_breakdown(&mut builder, &content.scores);
    recommendations(&mut builder, content);
    detailed_analysis(&mut builder, &content.scores);
    if config.include_content_dump {
        content_dump(&mut builder, &source, &content.source_label);
    }

    let doc = builder.finish(&config.title, &config.footer);
    tracing::debug!(pages = doc.page_count(), "Laid out report");
    doc
}

/// Section title, kept on the same page as the first `reserve` mm of its body.
fn section_heading(builder: &mut LayoutBuilder, text: &str, reserve: f32) {
    builder.advance(4.0);
    builder.ensure_space(SECTION.line_height() + 1.0 + reserve);
    builder.line(0.0, text, SECTION);
    builder.advance(1.0);
}

fn header(builder: &mut LayoutBuilder, config: &ReportConfig) {
    builder.paragraph(0.0, &config.title, TITLE);
    builder.line(0.0, config.generated_on(), SMALL);
    builder.advance(2.0);
    builder.rule(LIGHT_GRAY);
}

fn source_section(
    builder: &mut LayoutBuilder,
    source: &SourceKind,
    content_type: ContentType,
    config: &ReportConfig,
) {
    section_heading(builder, "Content Source", BODY.line_height() * 2.0);
    builder.paragraph(0.0, &source.describe(), BODY);
    if config.show_content_type {
        builder.line(
            0.0,
            format!("Content type: {}", content_type.display_name()),
            SMALL,
        );
    }
}

fn overall_score(builder: &mut LayoutBuilder, scores: &ScoreSet) {
    section_heading(builder, "Overall AEO Score", SCORE_BOX_HEIGHT);
    builder.ensure_space(SCORE_BOX_HEIGHT);
    let status = scores.status();
    let top = builder.cursor();
    builder.push(Element::Rect {
        x: MARGIN,
        y: top,
        width: CONTENT_WIDTH,
        height: SCORE_BOX_HEIGHT,
        stroke: Some(status.rgb()),
        fill: None,
    });
    builder.advance(4.0);
    builder.centered(
        format!("{}/100", scores.final_score()),
        TextStyle::bold(32.0).color(status.rgb()),
    );
    builder.advance(1.0);
    builder.centered(status.label(), TextStyle::bold(12.0).color(status.rgb()));
    let bottom = top + SCORE_BOX_HEIGHT;
    if builder.cursor() < bottom {
        builder.advance(bottom - builder.cursor());
    }
}

fn score_breakdown(builder: &mut LayoutBuilder, scores: &ScoreSet) {
    section_heading(builder, "Score Breakdown", TABLE_ROW_HEIGHT * 5.0);
    table_row(builder, ["Category", "Score", "Status"], BODY_BOLD, None);
    for (category, score) in scores.categories() {
        let status = ScoreStatus::from_score(score);
        let score_text = format!("{score}/100");
        table_row(
            builder,
            [category.name(), score_text.as_str(), status.label()],
            BODY,
            Some(status),
        );
    }
}

fn table_row(
    builder: &mut LayoutBuilder,
    cells: [&str; 3],
    style: TextStyle,
    status: Option<ScoreStatus>,
) {
    builder.ensure_space(TABLE_ROW_HEIGHT);
    let top = builder.cursor();
    let baseline = top + TABLE_ROW_HEIGHT * 0.65;
    let status_style = status.map_or(style, |s| TextStyle::bold(style.size).color(s.rgb()));
    for (cell, (indent, cell_style)) in cells.iter().zip([
        (2.0, style),
        (SCORE_COLUMN, style),
        (STATUS_COLUMN, status_style),
    ]) {
        builder.push(Element::Text {
            x: MARGIN + indent,
            y: baseline,
            text: (*cell).to_string(),
            style: cell_style,
        });
    }
    builder.advance(TABLE_ROW_HEIGHT);
    builder.rule(LIGHT_GRAY);
}

fn recommendations(builder: &mut LayoutBuilder, content: &ScoredContent) {
    section_heading(builder, "Top Recommendations", SUBSECTION.line_height() + 2.0);
    for (i, rec) in content.recommendations.iter().enumerate() {
        let mut block = Block::new();
        block.paragraph_spaced(0.0, &format!("{}. {}", i + 1, rec.title), SUBSECTION, 2.0);
        if !rec.description.is_empty() {
            block.paragraph_spaced(6.0, &rec.description, BODY, 1.0);
        }
        builder.block(block);
    }
}

fn detailed_analysis(builder: &mut LayoutBuilder, scores: &ScoreSet) {
    builder.new_page();
    builder.line(0.0, "Detailed Analysis", TextStyle::bold(18.0).color(DARK_GRAY));
    builder.advance(2.0);
    builder.rule(LIGHT_GRAY);

    for (category, score) in scores.categories() {
        let status = ScoreStatus::from_score(score);
        let mut block = Block::new();
        block
            .paragraph_spaced(0.0, category.name(), SECTION, 5.0)
            .paragraph_spaced(
                0.0,
                &format!("Score: {score}/100 ({})", status.label()),
                BODY_BOLD.color(status.rgb()),
                1.0,
            )
            .paragraph_spaced(0.0, text_bank::explanation(category), BODY, 2.0)
            .paragraph_spaced(0.0, "Recommended actions:", BODY_BOLD, 2.0);
        for item in text_bank::action_items(category, score) {
            block.bullet(4.0, item, BODY);
        }
        builder.block(block);
    }
}

fn content_dump(builder: &mut LayoutBuilder, source: &SourceKind, label: &str) {
    let body = match source {
        SourceKind::Empty => return,
        SourceKind::Url { .. } => format!("URL: {}", label.trim()),
        SourceKind::Text(text) => truncate_chars(text, CONTENT_DUMP_CHARS),
    };
    builder.new_page();
    builder.line(0.0, "Analyzed Content", TextStyle::bold(18.0).color(DARK_GRAY));
    builder.advance(2.0);
    builder.rule(LIGHT_GRAY);
    builder.advance(4.0);
    builder.paragraph(0.0, &body, TextStyle::regular(9.0));
}
