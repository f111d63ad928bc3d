//! Catalog store
//!
//! Owns the tool list, the bookmark set and the view state, and mirrors the
//! bookmark set and theme to a `KeyValueStore`.

use log::{debug, info};

use super::bookmarks::Bookmarks;
use super::filter::{self, CategoryFilter, ViewState};
use crate::domain::{Theme, Tool, ToolId};
use crate::error::Result;
use crate::storage::{self, BOOKMARKS_KEY, DARK_MODE_KEY, KeyValueStore};

/// Catalog state with persisted bookmarks and theme.
#[derive(Debug)]
pub struct CatalogStore<S: KeyValueStore> {
    tools: Vec<Tool>,
    categories: Vec<String>,
    bookmarks: Bookmarks,
    view: ViewState,
    storage: S,
}

impl<S: KeyValueStore> CatalogStore<S> {
    /// Build a store over `tools`, restoring bookmarks and theme from `storage`.
    ///
    /// Missing or malformed persisted values fall back to an empty bookmark
    /// set and the light theme.
    pub fn new(tools: Vec<Tool>, storage: S) -> Self {
        let bookmarks: Bookmarks = storage::read_json(&storage, BOOKMARKS_KEY).unwrap_or_default();
        let is_dark: bool = storage::read_json(&storage, DARK_MODE_KEY).unwrap_or(false);
        let categories = filter::categories(&tools);

        info!(
            "Catalog ready: {} tools, {} categories, {} bookmarks, {} theme",
            tools.len(),
            categories.len(),
            bookmarks.len(),
            Theme::from_dark(is_dark).name()
        );

        Self {
            tools,
            categories,
            bookmarks,
            view: ViewState {
                theme: Theme::from_dark(is_dark),
                ..ViewState::default()
            },
            storage,
        }
    }

    /// The full tool list in catalog order
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Look up a tool by id
    pub fn tool(&self, id: ToolId) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.id == id)
    }

    /// Unique categories present in the catalog, sorted
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn bookmarks(&self) -> &Bookmarks {
        &self.bookmarks
    }

    pub fn is_bookmarked(&self, id: ToolId) -> bool {
        self.bookmarks.contains(id)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn theme(&self) -> Theme {
        self.view.theme
    }

    /// The backing key-value store
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store, returning the backing key-value store.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Tools that pass the current filters, featured first then by name.
    pub fn visible(&self) -> Vec<&Tool> {
        filter::visible_tools(&self.tools, &self.bookmarks, &self.view)
    }

    /// Bookmarked tools in catalog order
    pub fn bookmarked_tools(&self) -> Vec<&Tool> {
        self.tools.iter().filter(|tool| self.bookmarks.contains(tool.id)).collect()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.view.search_query = query.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        debug!("Category selected: {}", category);
        self.view.category = category;
    }

    pub fn set_bookmarks_only(&mut self, bookmarks_only: bool) {
        self.view.bookmarks_only = bookmarks_only;
    }

    pub fn toggle_bookmarks_only(&mut self) {
        self.view.bookmarks_only = !self.view.bookmarks_only;
    }

    /// Reset the search query and category selection.
    pub fn clear_filters(&mut self) {
        self.view.search_query.clear();
        self.view.category = CategoryFilter::All;
    }

    /// Add or remove `id` from the bookmark set and persist the set.
    ///
    /// Returns whether `id` is bookmarked afterwards. The in-memory set is
    /// updated even when the write fails.
    pub fn toggle_bookmark(&mut self, id: ToolId) -> Result<bool> {
        let bookmarked = self.bookmarks.toggle(id);
        info!("Bookmark {} for tool {}", if bookmarked { "added" } else { "removed" }, id);
        storage::write_json(&mut self.storage, BOOKMARKS_KEY, &self.bookmarks)?;
        Ok(bookmarked)
    }

    /// Flip the theme and persist the dark flag.
    ///
    /// Returns the new theme. The in-memory theme is updated even when the
    /// write fails.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.view.theme = self.view.theme.toggled();
        info!("Theme switched to {}", self.view.theme.name());
        storage::write_json(&mut self.storage, DARK_MODE_KEY, &self.view.theme.is_dark())?;
        Ok(self.view.theme)
    }
}
