//! View state and the visible-list derivation.
//!
//! Everything here is a pure function of the tool list, the bookmark set and
//! the view state.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::bookmarks::Bookmarks;
use crate::domain::{Theme, Tool};

/// Label of the category chip that disables category filtering
pub const ALL_CATEGORIES: &str = "All";

/// Category selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category filtering
    #[default]
    All,
    /// Exact category match
    Only(String),
}

impl CategoryFilter {
    /// Parse a chip label; `"All"` is the sentinel for no filtering.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    /// Chip label for display
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }

    /// Whether a tool in `category` passes this filter
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User-controlled view state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Free-text search
    pub search_query: String,
    /// Selected category chip
    pub category: CategoryFilter,
    /// Only show bookmarked tools
    pub bookmarks_only: bool,
    /// Presentation theme (persisted)
    pub theme: Theme,
}

impl ViewState {
    /// Whether the search query has any non-whitespace content
    pub fn has_query(&self) -> bool {
        !self.search_query.trim().is_empty()
    }
}

/// Unique categories present in `tools`, sorted.
pub fn categories(tools: &[Tool]) -> Vec<String> {
    tools
        .iter()
        .map(|tool| tool.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Derive the visible, sorted subset of `tools`.
///
/// Filters apply in order: bookmarks-only, category, search. The search is
/// skipped for a blank query; otherwise the lowercased query (whitespace
/// included) must appear in the name, description or a tag.
pub fn visible_tools<'a>(tools: &'a [Tool], bookmarks: &Bookmarks, view: &ViewState) -> Vec<&'a Tool> {
    let needle = view.has_query().then(|| view.search_query.to_lowercase());

    let mut visible: Vec<&Tool> = tools
        .iter()
        .filter(|tool| !view.bookmarks_only || bookmarks.contains(tool.id))
        .filter(|tool| view.category.matches(&tool.category))
        .filter(|tool| needle.as_deref().is_none_or(|needle| tool.matches_query(needle)))
        .collect();

    // sort_by is stable: equal keys keep catalog order
    visible.sort_by(|a, b| compare_tools(a, b));
    visible
}

/// Featured tools first, then by name.
pub fn compare_tools(a: &Tool, b: &Tool) -> Ordering {
    b.featured.cmp(&a.featured).then_with(|| locale_cmp(&a.name, &b.name))
}

/// Locale-style string ordering.
///
/// Compares letters first, ignoring accents and case, so `Élan` sorts with
/// the E's. Ties are broken by accents (unaccented first), then by case
/// (lowercase first). Canonically equivalent strings compare equal.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.nfd().collect::<String>(), b.nfd().collect::<String>());

    base_letters(&a)
        .cmp(base_letters(&b))
        .then_with(|| a.chars().flat_map(char::to_lowercase).cmp(b.chars().flat_map(char::to_lowercase)))
        .then_with(|| case_tiebreak(&a, &b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase)
}

fn case_tiebreak(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            return match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            };
        }
    }
    a.len().cmp(&b.len())
}
