//! Bookmark set

use serde::{Deserialize, Serialize};

use crate::domain::ToolId;

/// Ordered set of bookmarked tool ids.
///
/// Serialized as a plain JSON array. New ids are appended; removal keeps the
/// order of the remaining ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bookmarks(Vec<ToolId>);

impl Bookmarks {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is bookmarked
    pub fn contains(&self, id: ToolId) -> bool {
        self.0.contains(&id)
    }

    /// Remove `id` if present, else append it. Returns the new membership.
    pub fn toggle(&mut self, id: ToolId) -> bool {
        if self.contains(id) {
            self.0.retain(|&existing| existing != id);
            false
        } else {
            self.0.push(id);
            true
        }
    }

    /// Ids in bookmark order
    pub fn ids(&self) -> &[ToolId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ToolId>> for Bookmarks {
    fn from(ids: Vec<ToolId>) -> Self {
        Self(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut bookmarks = Bookmarks::new();
        assert!(bookmarks.toggle(4));
        assert!(bookmarks.contains(4));
        assert!(!bookmarks.toggle(4));
        assert!(!bookmarks.contains(4));
        assert!(bookmarks.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let original = Bookmarks::from(vec![1, 2, 3]);
        for id in [1, 2, 3, 4, 99] {
            let mut bookmarks = original.clone();
            let before = bookmarks.contains(id);
            bookmarks.toggle(id);
            bookmarks.toggle(id);
            assert_eq!(bookmarks.contains(id), before, "id {}", id);
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let mut bookmarks = Bookmarks::from(vec![3, 1, 2]);
        bookmarks.toggle(1);
        bookmarks.toggle(7);
        assert_eq!(bookmarks.ids(), &[3, 2, 7]);
    }

    #[test]
    fn test_serializes_as_array() {
        let bookmarks = Bookmarks::from(vec![2, 10]);
        assert_eq!(serde_json::to_string(&bookmarks).unwrap(), "[2,10]");
        let parsed: Bookmarks = serde_json::from_str("[10,2]").unwrap();
        assert_eq!(parsed.ids(), &[10, 2]);
    }
}
