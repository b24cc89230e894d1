//! Text measurements feeding the scoring formulas.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static SENTENCE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("static regex"));
static PARAGRAPH_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t\r]*\n").expect("static regex"));

static QUESTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(what|why|how|when|where|who|which|can|does|is|are)\b[^?]*\?")
        .expect("static regex")
});
static LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(\d+[.)]|[*\-•])[ \t]+\S").expect("static regex")
});
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^[ \t]*#{1,6}[ \t]+\S|<h[1-3][\s>]").expect("static regex"));
static BOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\*\*[^*\n]+\*\*|__[^_\n]+__|<strong[\s>]|<b>").expect("static regex")
});

static SCHEMA_MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)schema\.org|itemscope|itemtype|json-ld").expect("static regex")
});
static TABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)<table[\s>]|^[ \t]*\|.*\|[ \t]*$").expect("static regex"));
static DEFINITION_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)<d[ltd][\s>]|^:[ \t]+\S").expect("static regex"));

/// Snippet-friendly formatting detected in a text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetFeatures {
    /// An interrogative word eventually followed by `?`
    pub has_questions: bool,
    /// Numbered or bulleted list items
    pub has_lists: bool,
    /// Markdown or HTML (h1-h3) headings
    pub has_headings: bool,
    /// Bold or strong emphasis
    pub has_bold: bool,
}

impl SnippetFeatures {
    #[must_use]
    pub fn detect(text: &str) -> Self {
        Self {
            has_questions: QUESTION.is_match(text),
            has_lists: LIST.is_match(text),
            has_headings: HEADING.is_match(text),
            has_bold: BOLD.is_match(text),
        }
    }
}

/// Structured-data markers detected in a text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureFeatures {
    /// schema.org / microdata / JSON-LD markers
    pub has_schema_markup: bool,
    /// HTML or Markdown tables
    pub has_tables: bool,
    /// Definition lists
    pub has_definition_lists: bool,
}

impl StructureFeatures {
    #[must_use]
    pub fn detect(text: &str) -> Self {
        Self {
            has_schema_markup: SCHEMA_MARKUP.is_match(text),
            has_tables: TABLE.is_match(text),
            has_definition_lists: DEFINITION_LIST.is_match(text),
        }
    }
}

/// Raw measurements of a text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    /// Length in characters
    pub char_count: usize,
    /// Whitespace-delimited tokens
    pub word_count: usize,
    /// `.`/`!`/`?`-delimited segments with content
    pub sentence_count: usize,
    /// Blank-line-separated blocks with content
    pub paragraph_count: usize,
    /// Lexicon matches (set by the scorer)
    pub keyword_count: usize,
    /// Keyword density in percent
    pub keyword_density: f64,
    /// Words per sentence, with at least one sentence assumed
    pub average_sentence_length: f64,
    pub snippet: SnippetFeatures,
    pub structure: StructureFeatures,
}

impl TextMetrics {
    /// Measure a text. Keyword fields stay zero until [`with_keywords`](Self::with_keywords).
    #[must_use]
    pub fn measure(text: &str) -> Self {
        let word_count = count_words(text);
        let sentence_count = count_sentences(text);
        Self {
            char_count: text.chars().count(),
            word_count,
            sentence_count,
            paragraph_count: count_paragraphs(text),
            keyword_count: 0,
            keyword_density: 0.0,
            average_sentence_length: word_count as f64 / sentence_count.max(1) as f64,
            snippet: SnippetFeatures::detect(text),
            structure: StructureFeatures::detect(text),
        }
    }

    /// Record the lexicon match count and derive the density.
    #[must_use]
    pub fn with_keywords(mut self, keyword_count: usize) -> Self {
        self.keyword_count = keyword_count;
        self.keyword_density = if self.word_count == 0 {
            0.0
        } else {
            100.0 * keyword_count as f64 / self.word_count as f64
        };
        self
    }
}

/// Whitespace-delimited non-empty tokens
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Sentence segments that contain something other than whitespace
#[must_use]
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_SPLIT
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// Blank-line-separated blocks that contain something other than whitespace
#[must_use]
pub fn count_paragraphs(text: &str) -> usize {
    PARAGRAPH_SPLIT
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .count()
}
