//! Note entity

use serde::{Deserialize, Serialize};

/// A free-text memo with tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Note {
    pub fn new(text: impl Into<String>, tags: Vec<String>) -> Self {
        Note {
            text: text.into(),
            tags,
        }
    }

    /// Exact, case-sensitive tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
