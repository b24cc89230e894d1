//! Keyword lexicons per content type.
//!
//! Each content type has a fixed list of terms. Matching is case-insensitive
//! and whole-word. Lists can be replaced per content type from configuration;
//! the built-in lists are the defaults.

use crate::model::ContentType;
use indexmap::IndexMap;
use regex::Regex;

/// Built-in lexicon for blog posts
pub const BLOG_TERMS: &[&str] = &[
    "ai",
    "artificial intelligence",
    "machine learning",
    "chatgpt",
    "search",
    "seo",
    "aeo",
    "optimization",
    "content",
    "answer engine",
    "voice search",
    "featured snippet",
    "guide",
    "how to",
    "tips",
];

/// Built-in lexicon for product descriptions
pub const PRODUCT_TERMS: &[&str] = &[
    "product",
    "features",
    "benefits",
    "price",
    "buy",
    "quality",
    "specifications",
    "reviews",
    "warranty",
    "shipping",
    "ai",
    "smart",
];

/// Built-in lexicon for service pages
pub const SERVICE_TERMS: &[&str] = &[
    "service",
    "solution",
    "expert",
    "consulting",
    "professional",
    "strategy",
    "results",
    "clients",
    "optimization",
    "ai",
    "support",
];

/// Built-in lexicon for everything else
pub const OTHER_TERMS: &[&str] = &[
    "ai",
    "optimization",
    "content",
    "search",
    "information",
    "answer",
    "question",
    "guide",
];

/// A compiled keyword list.
#[derive(Debug, Clone)]
pub struct Lexicon {
    terms: Vec<String>,
    patterns: Vec<Regex>,
}

impl Lexicon {
    /// Compile a lexicon. Blank terms are ignored.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut kept = Vec::new();
        let mut patterns = Vec::new();
        for term in terms {
            let term: String = term.into();
            let trimmed = term.trim();
            if trimmed.is_empty() {
                continue;
            }
            let pattern = format!(r"(?i)\b{}\b", regex::escape(trimmed));
            match Regex::new(&pattern) {
                Ok(re) => {
                    kept.push(trimmed.to_string());
                    patterns.push(re);
                }
                Err(e) => tracing::warn!("Skipping lexicon term '{}': {}", trimmed, e),
            }
        }
        Self {
            terms: kept,
            patterns,
        }
    }

    /// Terms in this lexicon, in order
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Total number of whole-word matches of every term in `text`
    #[must_use]
    pub fn count_matches(&self, text: &str) -> usize {
        self.patterns.iter().map(|re| re.find_iter(text).count()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// One lexicon per content type.
#[derive(Debug, Clone)]
pub struct LexiconSet {
    blog: Lexicon,
    product: Lexicon,
    service: Lexicon,
    other: Lexicon,
}

impl LexiconSet {
    /// The built-in lexicons
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            blog: Lexicon::new(BLOG_TERMS.iter().copied()),
            product: Lexicon::new(PRODUCT_TERMS.iter().copied()),
            service: Lexicon::new(SERVICE_TERMS.iter().copied()),
            other: Lexicon::new(OTHER_TERMS.iter().copied()),
        }
    }

    /// Built-in lexicons with per-type replacements.
    ///
    /// Keys are content type names; unknown keys are ignored with a warning.
    #[must_use]
    pub fn with_overrides(overrides: &IndexMap<String, Vec<String>>) -> Self {
        let mut set = Self::builtin();
        for (name, terms) in overrides {
            let Some(content_type) = ContentType::try_parse(name) else {
                tracing::warn!("Ignoring lexicon override for unknown content type '{}'", name);
                continue;
            };
            tracing::debug!(
                "Overriding {} lexicon with {} term(s)",
                content_type,
                terms.len()
            );
            *set.slot_mut(content_type) = Lexicon::new(terms.iter().cloned());
        }
        set
    }

    fn slot_mut(&mut self, content_type: ContentType) -> &mut Lexicon {
        match content_type {
            ContentType::Blog => &mut self.blog,
            ContentType::Product => &mut self.product,
            ContentType::Service => &mut self.service,
            ContentType::Other => &mut self.other,
        }
    }

    /// Lexicon for a content type
    #[must_use]
    pub const fn for_type(&self, content_type: ContentType) -> &Lexicon {
        match content_type {
            ContentType::Blog => &self.blog,
            ContentType::Product => &self.product,
            ContentType::Service => &self.service,
            ContentType::Other => &self.other,
        }
    }
}

impl Default for LexiconSet {
    fn default() -> Self {
        Self::builtin()
    }
}
