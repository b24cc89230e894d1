//! Content descriptors and source classification.

use serde::{Deserialize, Serialize};
use url::Url;

/// Placeholder shown when there is no source to describe
pub const PLACEHOLDER_SOURCE: &str = "Content analysis";

/// Kind of content being analyzed. Selects the keyword lexicon and the
/// content-type bonuses applied during scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Blog,
    Product,
    Service,
    #[default]
    #[serde(other)]
    Other,
}

impl ContentType {
    /// All content types in lexicon order
    pub const ALL: [Self; 4] = [Self::Blog, Self::Product, Self::Service, Self::Other];

    /// Parse a content type. Unrecognized names fall back to [`ContentType::Other`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        Self::try_parse(s).unwrap_or_else(|| {
            tracing::warn!("Unknown content type '{}', falling back to 'other'", s);
            Self::Other
        })
    }

    /// Parse a content type, returning `None` for unrecognized names.
    #[must_use]
    pub fn try_parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "blog" | "blog-post" | "blog post" | "article" => Some(Self::Blog),
            "product" | "product-description" => Some(Self::Product),
            "service" | "service-page" => Some(Self::Service),
            "other" | "" => Some(Self::Other),
            _ => None,
        }
    }

    /// Machine name as used on the wire and in configuration
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Product => "product",
            Self::Service => "service",
            Self::Other => "other",
        }
    }

    /// Human-readable noun used inside recommendation text
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Blog => "blog post",
            Self::Product => "product description",
            Self::Service => "webpage",
            Self::Other => "content",
        }
    }

    /// Title-cased name for report headings
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Blog => "Blog Post",
            Self::Product => "Product Page",
            Self::Service => "Service Page",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Input to a scoring run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDescriptor {
    /// Body to analyze
    pub raw_text: String,
    /// Content type used for lexicon and bonus selection
    pub content_type: ContentType,
    /// URL or text preview shown in reports; never used for scoring
    pub source_label: String,
}

impl ContentDescriptor {
    /// Describe pasted text. The text doubles as its own source label.
    pub fn from_text(text: impl Into<String>, content_type: ContentType) -> Self {
        let raw_text = text.into();
        Self {
            source_label: raw_text.clone(),
            raw_text,
            content_type,
        }
    }

    /// Describe text obtained for a URL.
    pub fn from_url(
        url: impl Into<String>,
        text: impl Into<String>,
        content_type: ContentType,
    ) -> Self {
        Self {
            raw_text: text.into(),
            content_type,
            source_label: url.into(),
        }
    }
}

/// Presentation-only classification of a source label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// An absolute URL with a host
    Url { host: String, path: String },
    /// Pasted text
    Text(String),
    /// Nothing to show
    Empty,
}

impl SourceKind {
    /// Classify a source label.
    ///
    /// Labels equal to [`PLACEHOLDER_SOURCE`] are treated as empty.
    #[must_use]
    pub fn classify(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.is_empty() || trimmed == PLACEHOLDER_SOURCE {
            return Self::Empty;
        }
        match Url::parse(trimmed) {
            Ok(url) if url.has_host() => Self::Url {
                host: url.host_str().unwrap_or_default().to_string(),
                path: url.path().to_string(),
            },
            _ => Self::Text(label.to_string()),
        }
    }

    #[must_use]
    pub const fn is_url(&self) -> bool {
        matches!(self, Self::Url { .. })
    }

    /// One-line description used in the report's source section.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Url { host, path } => {
                format!("Analyzed URL: {host}{}", truncate_chars(path, 30))
            }
            Self::Text(text) => {
                if text.chars().count() > 70 {
                    format!("Analyzed content: {}", truncate_chars(text, 70))
                } else {
                    text.clone()
                }
            }
            Self::Empty => PLACEHOLDER_SOURCE.to_string(),
        }
    }
}

/// Keep the first `max` characters, appending `...` when anything was cut.
#[must_use]
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
