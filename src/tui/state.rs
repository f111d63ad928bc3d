//! Application state for the TUI.
//!
//! Catalog state lives in `CatalogStore`; this is only what the terminal
//! front end adds on top: input mode, selection and a status line.

/// Current input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigation keys act on the list
    #[default]
    Browse,
    /// Typing edits the search query
    Search,
    /// Help overlay visible
    Help,
}

/// Front-end state owned by `App`.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current input mode
    pub mode: InputMode,
    /// Index into the visible list
    pub selected: Option<usize>,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl AppState {
    /// Create a new default state.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Placeholder shown instead of the tool list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Bookmarks view with nothing bookmarked
    NoBookmarks,
    /// A search that matched nothing
    NoMatches,
}

impl EmptyState {
    pub fn title(self) -> &'static str {
        match self {
            Self::NoBookmarks => "No bookmarks yet",
            Self::NoMatches => "No tools found",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::NoBookmarks => "Start bookmarking your favorite AI tools to see them here.",
            Self::NoMatches => "Try adjusting your search terms or filters.",
        }
    }

    /// Label and key of the recovery action
    pub fn action(self) -> (&'static str, &'static str) {
        match self {
            Self::NoBookmarks => ("Browse All Tools", "a"),
            Self::NoMatches => ("Clear Filters", "c"),
        }
    }
}
