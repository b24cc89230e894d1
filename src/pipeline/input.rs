//! Input resolution.

use crate::analysis::ContentFetcher;
use crate::error::{AeoError, ErrorContext, Result};
use crate::model::{ContentDescriptor, ContentType};
use std::path::{Path, PathBuf};

/// Where content to analyze comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Pasted text, its own source label
    Text(String),
    /// A URL resolved through a [`ContentFetcher`]
    Url(String),
    /// A text file on disk
    File(PathBuf),
}

impl InputSource {
    /// Collect CLI inputs in a stable order: text, URL, then files.
    #[must_use]
    pub fn from_args(text: Option<String>, url: Option<String>, files: &[PathBuf]) -> Vec<Self> {
        text.map(Self::Text)
            .into_iter()
            .chain(url.map(Self::Url))
            .chain(files.iter().cloned().map(Self::File))
            .collect()
    }

    /// Path of a file input
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            _ => None,
        }
    }

    /// Short name for logs and batch summaries
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Text(_) => "<text>".to_string(),
            Self::Url(url) => url.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Obtain the text and source label.
    pub fn resolve(
        &self,
        fetcher: &dyn ContentFetcher,
        content_type: ContentType,
    ) -> Result<ContentDescriptor> {
        match self {
            Self::Text(text) => Ok(ContentDescriptor::from_text(text.clone(), content_type)),
            Self::Url(url) => {
                tracing::debug!("Fetching {} with {} fetcher", url, fetcher.name());
                let text = fetcher
                    .fetch(url)
                    .with_context(|| format!("resolving {url}"))?;
                Ok(ContentDescriptor::from_url(url.clone(), text, content_type))
            }
            Self::File(path) => {
                let text =
                    std::fs::read_to_string(path).map_err(|e| AeoError::io(path.clone(), e))?;
                Ok(ContentDescriptor::from_text(text, content_type))
            }
        }
    }
}
