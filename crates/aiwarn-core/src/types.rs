use serde::{Deserialize, Serialize};

/// Parsed body of a product page's metadata sidecar document. Both fields
/// are optional on the wire; absence is tolerated downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Outcome of classifying a page's tag list for AI-content declarations.
/// `categories` is an insertion-ordered set: known categories in their fixed
/// priority order, then novel ones in first-seen order, no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiContentReport {
    pub has_ai: bool,
    pub categories: Vec<String>,
}

/// Script metadata shown in the overlay's footer credit. Purely cosmetic;
/// any or all fields may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    pub name: Option<String>,
    pub version: Option<String>,
    pub homepage: Option<String>,
}

impl Credit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.version.is_none() && self.homepage.is_none()
    }
}
