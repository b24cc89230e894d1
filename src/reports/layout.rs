//! Page layout model for PDF reports.
//!
//! Sections are laid out into a [`LayoutDocument`]: a list of A4 pages holding
//! positioned text, rectangles and rules. All coordinates are millimetres from
//! the top-left corner of the page; text `y` is the baseline. The layout is
//! pure data, so pagination and wrapping can be checked without decoding PDF.
//!
//! Text width is measured with the standard Helvetica metrics, the same fonts
//! the PDF writer references, so wrapped lines never cross the right margin.

use unicode_width::UnicodeWidthChar;

/// A4 page width (mm)
pub const PAGE_WIDTH: f32 = 210.0;
/// A4 page height (mm)
pub const PAGE_HEIGHT: f32 = 297.0;
/// Left, right and top margin (mm)
pub const MARGIN: f32 = 20.0;
/// Usable line width (mm)
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
/// Content never extends below this line (mm)
pub const PAGE_BREAK_Y: f32 = 260.0;
/// Footer baseline (mm)
pub const FOOTER_Y: f32 = 287.0;

/// Millimetres per PostScript point
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// An RGB color
pub type Rgb = (u8, u8, u8);

pub const BLACK: Rgb = (0, 0, 0);
pub const DARK_GRAY: Rgb = (55, 65, 81);
pub const GRAY: Rgb = (107, 114, 128);
pub const LIGHT_GRAY: Rgb = (209, 213, 219);
pub const ACCENT: Rgb = (37, 99, 235);

/// Font weight; maps to Helvetica / Helvetica-Bold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Font size, weight and color of a text run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Size in points
    pub size: f32,
    pub weight: FontWeight,
    pub color: Rgb,
}

impl TextStyle {
    #[must_use]
    pub const fn regular(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
            color: BLACK,
        }
    }

    #[must_use]
    pub const fn bold(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::Bold,
            color: BLACK,
        }
    }

    #[must_use]
    pub const fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Vertical space one wrapped line of this style occupies (mm)
    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.size * 0.5
    }
}

/// A positioned drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text {
        x: f32,
        y: f32,
        text: String,
        style: TextStyle,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        stroke: Option<Rgb>,
        fill: Option<Rgb>,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Rgb,
        /// Stroke width in points
        width: f32,
    },
}

/// One page of positioned elements
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub elements: Vec<Element>,
}

impl Page {
    /// Text runs on this page, in drawing order
    pub fn texts(&self) -> impl Iterator<Item = (&str, f32, f32, &TextStyle)> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text { x, y, text, style } => Some((text.as_str(), *x, *y, style)),
            _ => None,
        })
    }
}

/// An immutable, fully paginated report
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDocument {
    pub title: String,
    pub footer: String,
    pub pages: Vec<Page>,
}

impl LayoutDocument {
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Footer runs as stamped on each page, top to bottom.
    #[must_use]
    pub fn footer_lines(&self) -> Vec<String> {
        footer_lines(&self.footer)
    }

    /// All text runs in document order, footers excluded
    pub fn body_text(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flat_map(|page| {
            page.texts()
                .filter(|(_, _, y, _)| *y <= PAGE_BREAK_Y)
                .map(|(text, _, _, _)| text)
        })
    }
}

/// Helvetica advance widths for U+0020..=U+007E, in 1/1000 em
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

/// Helvetica-Bold advance widths for U+0020..=U+007E, in 1/1000 em
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0..?
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // P.._
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // `..o
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // p..~
];

/// Widest glyph in either font; used for characters outside the tables
const FALLBACK_WIDTH: u16 = 1015;

fn char_units(c: char, weight: FontWeight) -> u32 {
    let table = match weight {
        FontWeight::Regular => &HELVETICA_WIDTHS,
        FontWeight::Bold => &HELVETICA_BOLD_WIDTHS,
    };
    match c {
        ' '..='~' => u32::from(table[c as usize - 0x20]),
        '\t' => u32::from(table[0]),
        _ => {
            let columns = c.width().unwrap_or(0).max(1) as u32;
            columns * u32::from(FALLBACK_WIDTH)
        }
    }
}

/// Rendered width of `text` in millimetres.
///
/// Characters outside printable ASCII are measured pessimistically so
/// measured width is never below rendered width.
#[must_use]
pub fn text_width(text: &str, style: &TextStyle) -> f32 {
    let units: u32 = text.chars().map(|c| char_units(c, style.weight)).sum();
    units as f32 / 1000.0 * style.size * MM_PER_PT
}

/// Greedy word wrap to `max_width` millimetres.
///
/// Explicit newlines start a new line; blank input lines are kept as empty
/// lines. Words wider than a full line are split across lines by character.
#[must_use]
pub fn wrap_text(text: &str, max_width: f32, style: &TextStyle) -> Vec<String> {
    let mut lines = Vec::new();
    for raw_line in text.lines() {
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if text_width(&candidate, style) <= max_width {
                current = candidate;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if text_width(word, style) <= max_width {
                current = word.to_string();
            } else {
                let mut pieces = split_word(word, max_width, style);
                current = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            }
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn split_word(word: &str, max_width: f32, style: &TextStyle) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    for c in word.chars() {
        current.push(c);
        if current.chars().count() > 1 && text_width(&current, style) > max_width {
            current.pop();
            pieces.push(std::mem::take(&mut current));
            current.push(c);
        }
    }
    pieces.push(current);
    pieces
}

/// Footer captions wrap to at most this many lines
pub const FOOTER_MAX_LINES: usize = 3;

fn footer_style() -> TextStyle {
    TextStyle::regular(8.0).color(GRAY)
}

/// Whether `footer` wraps within [`FOOTER_MAX_LINES`] lines.
#[must_use]
pub fn footer_fits(footer: &str) -> bool {
    wrap_text(footer, CONTENT_WIDTH, &footer_style()).len() <= FOOTER_MAX_LINES
}

/// The footer as laid out: wrapped to the content width, extra lines cut
/// with an ellipsis.
#[must_use]
pub fn footer_lines(footer: &str) -> Vec<String> {
    let style = footer_style();
    let mut lines = wrap_text(footer, CONTENT_WIDTH, &style);
    if lines.len() > FOOTER_MAX_LINES {
        lines.truncate(FOOTER_MAX_LINES);
        if let Some(last) = lines.last_mut() {
            while !last.is_empty() && text_width(&format!("{last}..."), &style) > CONTENT_WIDTH {
                last.pop();
            }
            last.push_str("...");
        }
    }
    lines
}

/// Vertical placement of a [`BlockLine`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Below the previous line, after extra space (mm)
    Below(f32),
    /// On the previous line's baseline
    SameBaseline,
}

/// A line of a block that is measured before it is placed
#[derive(Debug, Clone)]
pub struct BlockLine {
    /// Horizontal offset from the left margin (mm)
    pub indent: f32,
    pub text: String,
    pub style: TextStyle,
    pub placement: Placement,
}

impl BlockLine {
    fn height(&self) -> f32 {
        match self.placement {
            Placement::Below(space) => space + self.style.line_height(),
            Placement::SameBaseline => 0.0,
        }
    }
}

/// Accumulates wrapped lines that should stay on one page when they fit.
#[derive(Debug, Clone, Default)]
pub struct Block {
    lines: Vec<BlockLine>,
}

impl Block {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `text` at `indent` from the left margin and append its lines.
    pub fn paragraph(&mut self, indent: f32, text: &str, style: TextStyle) -> &mut Self {
        self.paragraph_spaced(indent, text, style, 0.0)
    }

    /// Like [`paragraph`](Self::paragraph) with extra space above the first line.
    pub fn paragraph_spaced(
        &mut self,
        indent: f32,
        text: &str,
        style: TextStyle,
        space_before: f32,
    ) -> &mut Self {
        for (i, line) in wrap_text(text, CONTENT_WIDTH - indent, &style)
            .into_iter()
            .enumerate()
        {
            self.lines.push(BlockLine {
                indent,
                text: line,
                style,
                placement: Placement::Below(if i == 0 { space_before } else { 0.0 }),
            });
        }
        self
    }

    /// A bulleted item: glyph at `indent`, wrapped text hanging after it.
    pub fn bullet(&mut self, indent: f32, text: &str, style: TextStyle) -> &mut Self {
        const HANG: f32 = 5.0;
        for (i, line) in wrap_text(text, CONTENT_WIDTH - indent - HANG, &style)
            .into_iter()
            .enumerate()
        {
            if i == 0 {
                self.lines.push(BlockLine {
                    indent,
                    text: "\u{2022}".to_string(),
                    style,
                    placement: Placement::Below(1.0),
                });
                self.lines.push(BlockLine {
                    indent: indent + HANG,
                    text: line,
                    style,
                    placement: Placement::SameBaseline,
                });
            } else {
                self.lines.push(BlockLine {
                    indent: indent + HANG,
                    text: line,
                    style,
                    placement: Placement::Below(0.0),
                });
            }
        }
        self
    }

    /// Total height of the block (mm)
    #[must_use]
    pub fn height(&self) -> f32 {
        self.lines.iter().map(BlockLine::height).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Builds a [`LayoutDocument`] page by page with a vertical cursor.
#[derive(Debug)]
pub struct LayoutBuilder {
    pages: Vec<Page>,
    cursor: f32,
    last_baseline: f32,
}

impl Default for LayoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            cursor: MARGIN,
            last_baseline: MARGIN,
        }
    }

    /// Current vertical position (mm from the top edge)
    #[must_use]
    pub const fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Move the cursor down
    pub fn advance(&mut self, dy: f32) {
        self.cursor += dy;
    }

    /// Start a new page and reset the cursor to the top margin.
    pub fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.cursor = MARGIN;
    }

    /// Break the page if `height` more millimetres would cross the bottom limit.
    pub fn ensure_space(&mut self, height: f32) {
        if self.cursor + height > PAGE_BREAK_Y && self.cursor > MARGIN {
            self.new_page();
        }
    }

    /// Add an element to the current page
    pub fn push(&mut self, element: Element) {
        if let Some(page) = self.pages.last_mut() {
            page.elements.push(element);
        }
    }

    /// Place one line of text at the cursor and advance past it.
    pub fn line(&mut self, indent: f32, text: impl Into<String>, style: TextStyle) {
        let height = style.line_height();
        self.ensure_space(height);
        let baseline = self.cursor + height * 0.75;
        self.push(Element::Text {
            x: MARGIN + indent,
            y: baseline,
            text: text.into(),
            style,
        });
        self.last_baseline = baseline;
        self.cursor += height;
    }

    /// Place a line of text centered horizontally within the content width.
    pub fn centered(&mut self, text: impl Into<String>, style: TextStyle) {
        let text = text.into();
        let indent = ((CONTENT_WIDTH - text_width(&text, &style)) / 2.0).max(0.0);
        self.line(indent, text, style);
    }

    /// Wrap and place a paragraph, breaking pages between lines as needed.
    pub fn paragraph(&mut self, indent: f32, text: &str, style: TextStyle) {
        for line in wrap_text(text, CONTENT_WIDTH - indent, &style) {
            self.line(indent, line, style);
        }
    }

    /// Place a block, keeping it on one page when it fits on a fresh page.
    ///
    /// Taller blocks break between lines instead.
    pub fn block(&mut self, block: Block) {
        let height = block.height();
        if height <= PAGE_BREAK_Y - MARGIN {
            self.ensure_space(height);
        }
        for line in block.lines {
            match line.placement {
                Placement::SameBaseline => self.push(Element::Text {
                    x: MARGIN + line.indent,
                    y: self.last_baseline,
                    text: line.text,
                    style: line.style,
                }),
                Placement::Below(space) => {
                    self.ensure_space(space + line.style.line_height());
                    if self.cursor > MARGIN {
                        self.cursor += space;
                    }
                    self.line(line.indent, line.text, line.style);
                }
            }
        }
    }

    /// Horizontal rule across the content width at the cursor
    pub fn rule(&mut self, color: Rgb) {
        let y = self.cursor;
        self.push(Element::Line {
            x1: MARGIN,
            y1: y,
            x2: PAGE_WIDTH - MARGIN,
            y2: y,
            color,
            width: 0.5,
        });
    }

    /// Stamp the footer on every page and finish the document.
    #[must_use]
    pub fn finish(mut self, title: &str, footer: &str) -> LayoutDocument {
        let style = footer_style();
        let lines = footer_lines(footer);
        let top = FOOTER_Y - style.line_height() * (lines.len() - 1) as f32;
        for page in &mut self.pages {
            page.elements.push(Element::Line {
                x1: MARGIN,
                y1: top - 5.0,
                x2: PAGE_WIDTH - MARGIN,
                y2: top - 5.0,
                color: LIGHT_GRAY,
                width: 0.5,
            });
            for (i, line) in lines.iter().enumerate() {
                let x = MARGIN + ((CONTENT_WIDTH - text_width(line, &style)) / 2.0).max(0.0);
                page.elements.push(Element::Text {
                    x,
                    y: top + style.line_height() * i as f32,
                    text: line.clone(),
                    style,
                });
            }
        }
        LayoutDocument {
            title: title.to_string(),
            footer: footer.to_string(),
            pages: self.pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_helvetica() {
        // "Hi" = 722 + 222 units at 10pt
        let w = text_width("Hi", &TextStyle::regular(10.0));
        assert!((w - 0.944 * 10.0 * MM_PER_PT).abs() < 1e-4);
        assert!(text_width("Hi", &TextStyle::bold(10.0)) > w);
    }

    #[test]
    fn test_wrap_respects_width() {
        let style = TextStyle::regular(10.0);
        let text = "answer engines quote short direct answers ".repeat(30);
        let lines = wrap_text(&text, 80.0, &style);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, &style) <= 80.0);
        }
        let rejoined = lines.join(" ");
        assert_eq!(
            rejoined.split_whitespace().collect::<Vec<_>>(),
            text.split_whitespace().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let style = TextStyle::regular(10.0);
        let word = "x".repeat(400);
        let lines = wrap_text(&word, 50.0, &style);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(text_width(line, &style) <= 50.0);
        }
    }

    #[test]
    fn test_wrap_keeps_newlines() {
        let lines = wrap_text("one\n\ntwo", 100.0, &TextStyle::regular(10.0));
        assert_eq!(lines, vec!["one", "", "two"]);
        assert_eq!(wrap_text("", 100.0, &TextStyle::regular(10.0)), vec![""]);
    }

    #[test]
    fn test_ensure_space_breaks_page() {
        let mut builder = LayoutBuilder::new();
        builder.advance(PAGE_BREAK_Y - MARGIN - 2.0);
        builder.ensure_space(5.0);
        assert_eq!(builder.cursor(), MARGIN);
        let doc = builder.finish("t", "f");
        assert_eq!(doc.page_count(), 2);
    }

    #[test]
    fn test_lines_stay_above_break() {
        let mut builder = LayoutBuilder::new();
        for i in 0..200 {
            builder.line(0.0, format!("line {i}"), TextStyle::regular(10.0));
        }
        let doc = builder.finish("t", "f");
        assert!(doc.page_count() > 1);
        for page in &doc.pages {
            for (_, _, y, _) in page.texts().filter(|(t, ..)| *t != "f") {
                assert!(y <= PAGE_BREAK_Y);
            }
        }
        assert_eq!(doc.body_text().count(), 200);
    }

    #[test]
    fn test_block_moves_to_next_page_when_it_fits() {
        let mut builder = LayoutBuilder::new();
        builder.advance(PAGE_BREAK_Y - MARGIN - 8.0);
        let mut block = Block::new();
        block
            .paragraph(0.0, "Title", TextStyle::bold(12.0))
            .paragraph(0.0, "Body", TextStyle::regular(10.0));
        builder.block(block);
        let doc = builder.finish("t", "f");
        assert_eq!(doc.page_count(), 2);
        assert!(doc.pages[0].texts().all(|(t, ..)| t == "f"));
    }

    #[test]
    fn test_bullet_shares_baseline() {
        let mut builder = LayoutBuilder::new();
        let mut block = Block::new();
        block.bullet(0.0, "Item", TextStyle::regular(10.0));
        builder.block(block);
        let doc = builder.finish("t", "f");
        let texts: Vec<_> = doc.pages[0].texts().collect();
        assert_eq!(texts[0].0, "\u{2022}");
        assert_eq!(texts[1].0, "Item");
        assert_eq!(texts[0].2, texts[1].2);
    }

    #[test]
    fn test_footer_on_every_page() {
        let mut builder = LayoutBuilder::new();
        builder.new_page();
        builder.new_page();
        let doc = builder.finish("t", "Footer");
        assert_eq!(doc.page_count(), 3);
        for page in &doc.pages {
            assert_eq!(page.texts().filter(|(t, ..)| *t == "Footer").count(), 1);
        }
    }

    #[test]
    fn test_long_footer_wraps_inside_margins() {
        let footer = "Prepared by the Example Consulting Group for internal review only. \
                      Scores are indicative and should be read alongside the detailed analysis.";
        let mut builder = LayoutBuilder::new();
        builder.new_page();
        let doc = builder.finish("t", footer);

        let lines = doc.footer_lines();
        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), footer.split_whitespace().collect::<Vec<_>>().join(" "));
        for page in &doc.pages {
            let runs: Vec<_> = page.texts().filter(|(_, _, y, _)| *y > PAGE_BREAK_Y).collect();
            assert_eq!(runs.len(), lines.len());
            assert_eq!(runs.last().map(|r| r.2), Some(FOOTER_Y));
            for (text, x, _, style) in runs {
                assert!(x >= MARGIN);
                assert!(x + text_width(text, style) <= PAGE_WIDTH - MARGIN + 0.01);
            }
        }
    }

    #[test]
    fn test_footer_is_capped_with_ellipsis() {
        let footer = "caption ".repeat(200);
        assert!(!footer_fits(&footer));
        let lines = footer_lines(&footer);
        assert_eq!(lines.len(), FOOTER_MAX_LINES);
        assert!(lines[FOOTER_MAX_LINES - 1].ends_with("..."));
        assert!(footer_fits("Generated by aeo-scorer"));
    }
}
