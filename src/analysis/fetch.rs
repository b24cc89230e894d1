//! Content fetchers.
//!
//! Real page retrieval is deliberately absent. [`PlaceholderFetcher`]
//! produces deterministic filler text so URL input still flows through the
//! whole pipeline, and [`StaticFetcher`] serves canned text in tests.

use super::ContentFetcher;
use crate::error::{AeoError, FetchErrorKind, Result};
use std::collections::HashMap;
use url::Url;

/// Fetcher that fabricates filler text mentioning the URL's host.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderFetcher;

impl PlaceholderFetcher {
    /// Create a new placeholder fetcher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ContentFetcher for PlaceholderFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url.trim()).map_err(|e| {
            AeoError::fetch(url, FetchErrorKind::InvalidUrl(e.to_string()))
        })?;
        let host = parsed.host_str().ok_or_else(|| {
            AeoError::fetch(url, FetchErrorKind::InvalidUrl("URL has no host".to_string()))
        })?;

        tracing::debug!("Using placeholder content for {}", host);
        Ok(format!(
            "Content from {host}\n\n\
             This is sample content standing in for the page at {host}. \
             It discusses how answer engines select information and why clear \
             structure matters for search visibility.\n\n\
             Answer engines reward pages that respond to specific questions with \
             concise, well organized information. Optimization for these systems \
             builds on traditional SEO but places more weight on direct answers."
        ))
    }

    fn name(&self) -> &'static str {
        "placeholder"
    }
}

/// Fetcher backed by a fixed URL-to-text map.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
}

impl StaticFetcher {
    /// Create an empty static fetcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the text served for `url`.
    #[must_use]
    pub fn with(mut self, url: impl Into<String>, text: impl Into<String>) -> Self {
        self.pages.insert(url.into(), text.into());
        self
    }
}

impl ContentFetcher for StaticFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| {
                AeoError::fetch(
                    "static lookup",
                    FetchErrorKind::NotFound(url.to_string()),
                )
            })
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
