//! Catalog entries
//!
//! A `Tool` is loaded once from the catalog data and never mutated.

use serde::{Deserialize, Serialize};

/// Unique identifier of a tool within the catalog
pub type ToolId = u32;

/// One catalog entry representing an external product or service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Unique id within the catalog
    pub id: ToolId,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Single-valued classification used for coarse filtering
    pub category: String,
    /// External website opened from the card
    pub website: String,
    /// Logo URL
    pub logo: String,
    /// Free-form labels used in search and badges
    #[serde(default)]
    pub tags: Vec<String>,
    /// Promotes the tool to sort precedence
    #[serde(default)]
    pub featured: bool,
}

impl Tool {
    /// Case-insensitive substring match against name, description or any tag.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// Badge classification for tags the card highlights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Popular,
    Free,
    New,
    Paid,
    Freemium,
    OpenSource,
    Other,
}

impl TagKind {
    /// Classify a tag by exact label.
    pub fn of(tag: &str) -> Self {
        match tag {
            "Popular" => Self::Popular,
            "Free" => Self::Free,
            "New" => Self::New,
            "Paid" => Self::Paid,
            "Freemium" => Self::Freemium,
            "Open Source" => Self::OpenSource,
            _ => Self::Other,
        }
    }
}
