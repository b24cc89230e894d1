//! Unified error types for aeo-scorer.
//!
//! Scoring itself never fails: empty or malformed text degrades to low
//! scores. Errors come from the edges, when content is fetched, a remote
//! analyzer is called, a report is written or configuration is loaded.

use crate::reports::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for aeo-scorer operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AeoError {
    /// Errors while obtaining content for a URL
    #[error("Failed to fetch content: {context}")]
    Fetch {
        context: String,
        #[source]
        source: FetchErrorKind,
    },

    /// Errors from an analyzer (usually the remote endpoint)
    #[error("Analysis failed: {context}")]
    Analysis {
        context: String,
        #[source]
        source: AnalysisErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportError,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific fetch error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FetchErrorKind {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("No content available for {0}")]
    NotFound(String),
}

/// Specific analysis error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AnalysisErrorKind {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Analyzer not configured: {0}")]
    NotConfigured(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for aeo-scorer operations
pub type Result<T> = std::result::Result<T, AeoError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl AeoError {
    /// Create a fetch error with context
    pub fn fetch(context: impl Into<String>, source: FetchErrorKind) -> Self {
        Self::Fetch {
            context: context.into(),
            source,
        }
    }

    /// Create an analysis error with context
    pub fn analysis(context: impl Into<String>, source: AnalysisErrorKind) -> Self {
        Self::Analysis {
            context: context.into(),
            source,
        }
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportError) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for AeoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<ReportError> for AeoError {
    fn from(err: ReportError) -> Self {
        Self::report("", err)
    }
}

impl From<serde_json::Error> for AeoError {
    fn from(err: serde_json::Error) -> Self {
        Self::analysis(
            "JSON deserialization",
            AnalysisErrorKind::InvalidResponse(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// # Example
///
/// ```ignore
/// use aeo_scorer::error::ErrorContext;
///
/// let text = fetcher.fetch(url).with_context(|| format!("resolving {url}"))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    ///
    /// The context string is prepended to the error's existing context.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<AeoError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: AeoError, new_ctx: &str) -> AeoError {
    match err {
        AeoError::Fetch {
            context: existing,
            source,
        } => AeoError::Fetch {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AeoError::Analysis {
            context: existing,
            source,
        } => AeoError::Analysis {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AeoError::Report {
            context: existing,
            source,
        } => AeoError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AeoError::Io {
            path,
            message,
            source,
        } => AeoError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        AeoError::Validation(msg) => AeoError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to a validation error with the given message.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| AeoError::validation(context))
    }
}
