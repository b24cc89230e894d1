//! Recommendation value object.

use serde::{Deserialize, Serialize};

/// A short improvement suggestion derived from a [`ScoreSet`](super::ScoreSet).
///
/// On the wire a recommendation is either `{title, description}` or a bare
/// string, which becomes the title with an empty description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RecommendationWire")]
pub struct Recommendation {
    pub title: String,
    pub description: String,
}

impl Recommendation {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Single-line rendering, `"Title: description"`
    #[must_use]
    pub fn to_text(&self) -> String {
        if self.description.is_empty() {
            self.title.clone()
        } else {
            format!("{}: {}", self.title, self.description)
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecommendationWire {
    Text(String),
    Structured {
        title: String,
        #[serde(default)]
        description: String,
    },
}

impl From<RecommendationWire> for Recommendation {
    fn from(wire: RecommendationWire) -> Self {
        match wire {
            RecommendationWire::Text(title) => Self::new(title, String::new()),
            RecommendationWire::Structured { title, description } => Self::new(title, description),
        }
    }
}
