//! Shared data model for content scoring.
//!
//! The scoring engine, the recommendation engine, the report renderer and
//! the remote analyzer all exchange these types:
//!
//! - [`ScoreSet`]: four sub-scores plus the derived final score
//! - [`ContentType`] / [`ContentDescriptor`]: what is being analyzed
//! - [`SourceKind`]: presentation-only classification of a source label
//! - [`Recommendation`]: title + description improvement suggestion

mod content;
mod recommendation;
mod scores;

pub use content::*;
pub use recommendation::Recommendation;
pub use scores::*;
