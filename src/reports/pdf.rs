//! PDF report generator.
//!
//! Serializes a [`LayoutDocument`] with `lopdf`. Only the base-14 Helvetica
//! fonts are referenced, so nothing is embedded and output stays small.
//! Output is a pure function of the layout: no creation date is written and
//! the trailer ID is a hash of the page content.

use super::layout::{
    Element, FontWeight, LayoutDocument, Rgb, TextStyle, MM_PER_PT, PAGE_HEIGHT, PAGE_WIDTH,
};
use super::sections::render_content;
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, ScoredContent};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};
use std::path::Path;
use xxhash_rust::xxh3::xxh3_128;

const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";

/// PDF report generator
#[derive(Debug, Clone, Copy)]
pub struct PdfReporter {
    compress: bool,
}

impl Default for PdfReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfReporter {
    /// Create a new PDF reporter with compressed content streams
    #[must_use]
    pub const fn new() -> Self {
        Self { compress: true }
    }

    /// Leave content streams uncompressed (useful for inspecting output)
    #[must_use]
    pub const fn uncompressed(mut self) -> Self {
        self.compress = false;
        self
    }

    /// Serialize a laid-out document to PDF bytes.
    pub fn serialize(&self, layout: &LayoutDocument) -> Result<Vec<u8>, ReportError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let bold_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica-Bold",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                REGULAR_FONT => regular_id,
                BOLD_FONT => bold_id,
            },
        });

        let mut kids: Vec<Object> = Vec::with_capacity(layout.pages.len());
        let mut fingerprint = Vec::new();
        for page in &layout.pages {
            let operations: Vec<Operation> =
                page.elements.iter().flat_map(element_operations).collect();
            let encoded = Content { operations }
                .encode()
                .map_err(|e| ReportError::PdfError(e.to_string()))?;
            fingerprint.extend_from_slice(&encoded);

            let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        let media_box: Vec<Object> = vec![
            0.into(),
            0.into(),
            to_points(PAGE_WIDTH).into(),
            to_points(PAGE_HEIGHT).into(),
        ];
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => media_box,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::String(encode_win_ansi(&layout.title), StringFormat::Literal),
            "Producer" => Object::string_literal(
                format!("aeo-scorer {}", env!("CARGO_PKG_VERSION")),
            ),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);

        fingerprint.extend_from_slice(layout.title.as_bytes());
        let id = xxh3_128(&fingerprint).to_be_bytes().to_vec();
        doc.trailer.set(
            "ID",
            vec![
                Object::String(id.clone(), StringFormat::Hexadecimal),
                Object::String(id, StringFormat::Hexadecimal),
            ],
        );

        if self.compress {
            doc.compress();
        }

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .map_err(|e| ReportError::PdfError(e.to_string()))?;
        tracing::debug!(
            pages = layout.page_count(),
            bytes = buffer.len(),
            "Serialized PDF report"
        );
        Ok(buffer)
    }

    /// Render and write a report to `path`.
    pub fn save(
        &self,
        content: &ScoredContent,
        config: &ReportConfig,
        path: &Path,
    ) -> Result<(), ReportError> {
        let bytes = self.generate_report(content, config)?;
        std::fs::write(path, bytes)?;
        tracing::info!("Wrote PDF report to {}", path.display());
        Ok(())
    }
}

impl ReportGenerator for PdfReporter {
    fn generate_report(
        &self,
        content: &ScoredContent,
        config: &ReportConfig,
    ) -> Result<Vec<u8>, ReportError> {
        self.serialize(&render_content(content, config))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Pdf
    }
}

fn to_points(mm: f32) -> f32 {
    mm / MM_PER_PT
}

/// Convert a top-down millimetre y coordinate to PDF user space
fn flip_y(mm: f32) -> f32 {
    to_points(PAGE_HEIGHT - mm)
}

fn color_operands(color: Rgb) -> Vec<Object> {
    let (r, g, b) = color;
    vec![
        (f32::from(r) / 255.0).into(),
        (f32::from(g) / 255.0).into(),
        (f32::from(b) / 255.0).into(),
    ]
}

fn font_name(style: &TextStyle) -> &'static str {
    match style.weight {
        FontWeight::Regular => REGULAR_FONT,
        FontWeight::Bold => BOLD_FONT,
    }
}

fn element_operations(element: &Element) -> Vec<Operation> {
    match element {
        Element::Text { x, y, text, style } => vec![
            Operation::new("BT", vec![]),
            Operation::new("rg", color_operands(style.color)),
            Operation::new("Tf", vec![font_name(style).into(), style.size.into()]),
            Operation::new("Td", vec![to_points(*x).into(), flip_y(*y).into()]),
            Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ],
        Element::Rect {
            x,
            y,
            width,
            height,
            stroke,
            fill,
        } => {
            let mut ops = Vec::with_capacity(5);
            if let Some(color) = stroke {
                ops.push(Operation::new("RG", color_operands(*color)));
                ops.push(Operation::new("w", vec![1.into()]));
            }
            if let Some(color) = fill {
                ops.push(Operation::new("rg", color_operands(*color)));
            }
            ops.push(Operation::new(
                "re",
                vec![
                    to_points(*x).into(),
                    flip_y(*y + *height).into(),
                    to_points(*width).into(),
                    to_points(*height).into(),
                ],
            ));
            let paint = match (stroke.is_some(), fill.is_some()) {
                (true, true) => "B",
                (false, true) => "f",
                (true, false) => "S",
                (false, false) => "n",
            };
            ops.push(Operation::new(paint, vec![]));
            ops
        }
        Element::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            width,
        } => vec![
            Operation::new("RG", color_operands(*color)),
            Operation::new("w", vec![(*width).into()]),
            Operation::new("m", vec![to_points(*x1).into(), flip_y(*y1).into()]),
            Operation::new("l", vec![to_points(*x2).into(), flip_y(*y2).into()]),
            Operation::new("S", vec![]),
        ],
    }
}

/// Encode text for a WinAnsiEncoding font.
///
/// Latin-1 maps directly; common typographic punctuation maps to its
/// Windows-1252 slot; anything else becomes `?`.
#[must_use]
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{20AC}' => 0x80,
            '\u{2122}' => 0x99,
            '\t' => b' ',
            c if (' '..='~').contains(&c) => c as u8,
            c if ('\u{A0}'..='\u{FF}').contains(&c) => c as u8,
            _ => b'?',
        })
        .collect()
}
