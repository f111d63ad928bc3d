//! TUI Application
//!
//! Owns the catalog store and the navigator, and turns key presses into
//! store updates.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, warn};

use super::state::{AppState, InputMode};
use super::views::Screen;
use crate::catalog::{CatalogStore, CategoryFilter};
use crate::domain::Tool;
use crate::navigate::Navigator;
use crate::storage::KeyValueStore;

/// Main TUI application
pub struct App<S: KeyValueStore, N: Navigator> {
    /// Front-end state
    pub state: AppState,
    store: CatalogStore<S>,
    navigator: N,
}

impl<S: KeyValueStore, N: Navigator> App<S, N> {
    /// Create a new application over a loaded store
    pub fn new(store: CatalogStore<S>, navigator: N) -> Self {
        let mut app = Self {
            state: AppState::new(),
            store,
            navigator,
        };
        app.select_first();
        app
    }

    pub fn store(&self) -> &CatalogStore<S> {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Snapshot of everything the views render
    pub fn screen(&self) -> Screen<'_> {
        Screen {
            visible: self.store.visible(),
            categories: self.store.categories(),
            view: self.store.view(),
            bookmarks: self.store.bookmarks(),
            selected: self.state.selected,
            mode: self.state.mode,
            status: self.state.status_message.as_deref(),
        }
    }

    /// Currently selected tool
    pub fn selected_tool(&self) -> Option<&Tool> {
        let index = self.state.selected?;
        self.store.visible().get(index).copied()
    }

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        match self.state.mode {
            InputMode::Browse => self.handle_browse_key(key),
            InputMode::Search => self.handle_search_key(key),
            InputMode::Help => self.state.mode = InputMode::Browse,
        }

        self.clamp_selection();
        self.state.should_quit
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('?') => self.state.mode = InputMode::Help,
            KeyCode::Char('/') => self.state.mode = InputMode::Search,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Home | KeyCode::Char('g') => self.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => self.next_category(),
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => self.prev_category(),
            KeyCode::Char('b') => {
                self.store.toggle_bookmarks_only();
                self.select_first();
            }
            KeyCode::Char('a') => self.browse_all(),
            KeyCode::Esc => {
                if self.store.view().bookmarks_only {
                    self.browse_all();
                } else {
                    self.clear_status();
                }
            }
            KeyCode::Char('c') => self.clear_filters(),
            KeyCode::Char(' ') => self.toggle_selected_bookmark(),
            KeyCode::Enter | KeyCode::Char('o') => self.open_selected(),
            KeyCode::Char('t') => self.toggle_theme(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.state.mode = InputMode::Browse,
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.update_query(String::new());
            }
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                let mut query = self.store.view().search_query.clone();
                query.push(c);
                self.update_query(query);
            }
            KeyCode::Backspace => {
                let mut query = self.store.view().search_query.clone();
                query.pop();
                self.update_query(query);
            }
            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_prev(),
            _ => {}
        }
    }

    fn update_query(&mut self, query: String) {
        self.store.set_search_query(query);
        self.select_first();
    }

    /// Request to quit
    pub fn quit(&mut self) {
        self.state.should_quit = true;
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.state.status_message = Some(message.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.state.status_message = None;
    }

    /// Leave the bookmarks-only view.
    pub fn browse_all(&mut self) {
        self.store.set_bookmarks_only(false);
        self.select_first();
    }

    /// Reset the search query and category.
    pub fn clear_filters(&mut self) {
        self.store.clear_filters();
        self.select_first();
    }

    /// Select the next category chip, wrapping after the last.
    pub fn next_category(&mut self) {
        let chips = self.store.categories().len() + 1;
        let index = (self.category_index() + 1) % chips;
        self.select_category(index);
    }

    /// Select the previous category chip, wrapping before "All".
    pub fn prev_category(&mut self) {
        let chips = self.store.categories().len() + 1;
        let index = (self.category_index() + chips - 1) % chips;
        self.select_category(index);
    }

    /// Chip index of the current category; 0 is "All".
    fn category_index(&self) -> usize {
        match &self.store.view().category {
            CategoryFilter::All => 0,
            CategoryFilter::Only(category) => self
                .store
                .categories()
                .iter()
                .position(|c| c == category)
                .map_or(0, |i| i + 1),
        }
    }

    fn select_category(&mut self, index: usize) {
        let category = match index {
            0 => CategoryFilter::All,
            i => CategoryFilter::Only(self.store.categories()[i - 1].clone()),
        };
        self.store.set_category(category);
        self.select_first();
    }

    /// Bookmark or unbookmark the selected tool. Never navigates.
    pub fn toggle_selected_bookmark(&mut self) {
        let Some(tool) = self.selected_tool() else {
            return;
        };
        let (id, name) = (tool.id, tool.name.clone());

        match self.store.toggle_bookmark(id) {
            Ok(true) => self.set_status(format!("Bookmarked {}", name)),
            Ok(false) => self.set_status(format!("Removed bookmark for {}", name)),
            Err(e) => {
                warn!("Failed to save bookmarks: {}", e);
                self.set_status(format!("Bookmarks not saved: {}", e));
            }
        }
    }

    /// Open the selected tool's website.
    pub fn open_selected(&mut self) {
        let Some(tool) = self.selected_tool() else {
            return;
        };
        let (website, name) = (tool.website.clone(), tool.name.clone());

        match self.navigator.open(&website) {
            Ok(()) => self.set_status(format!("Opened {}", name)),
            Err(e) => self.set_status(e.to_string()),
        }
    }

    pub fn toggle_theme(&mut self) {
        match self.store.toggle_theme() {
            Ok(theme) => debug!("Theme is now {}", theme.name()),
            Err(e) => {
                warn!("Failed to save theme: {}", e);
                self.set_status(format!("Theme not saved: {}", e));
            }
        }
    }

    fn visible_len(&self) -> usize {
        self.store.visible().len()
    }

    /// Select the next tool, wrapping to the top
    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        self.state.selected = Some(match self.state.selected {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        });
    }

    /// Select the previous tool, wrapping to the bottom
    pub fn select_prev(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        self.state.selected = Some(match self.state.selected {
            None | Some(0) => len - 1,
            Some(i) => i - 1,
        });
    }

    pub fn select_first(&mut self) {
        self.state.selected = (self.visible_len() > 0).then_some(0);
    }

    pub fn select_last(&mut self) {
        self.state.selected = self.visible_len().checked_sub(1);
    }

    /// Keep the selection inside the visible list.
    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        self.state.selected = match (self.state.selected, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Theme;
    use crate::domain::tool::fixtures::tool;
    use crate::navigate::RecordingNavigator;
    use crate::storage::{BOOKMARKS_KEY, DARK_MODE_KEY, MemoryStore};

    fn app() -> App<MemoryStore, RecordingNavigator> {
        let tools = vec![
            tool(1, "ChatGPT", "Chatbots", &["Popular"], true),
            tool(2, "Midjourney", "Image", &["Paid"], false),
            tool(3, "Cursor", "Coding", &["New"], false),
            tool(4, "Tabnine", "Coding", &["Freemium"], false),
        ];
        App::new(CatalogStore::new(tools, MemoryStore::new()), RecordingNavigator::new())
    }

    fn press(app: &mut App<MemoryStore, RecordingNavigator>, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App<MemoryStore, RecordingNavigator>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_app_creation_selects_first() {
        let app = app();
        assert_eq!(app.state.selected, Some(0));
        assert_eq!(app.selected_tool().map(|t| t.id), Some(1));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(press(&mut app, KeyCode::Char('q')));

        let mut app = self::app();
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_search_mode_updates_query_per_keystroke() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.state.mode, InputMode::Search);

        type_str(&mut app, "cur");
        assert_eq!(app.store().view().search_query, "cur");
        assert_eq!(app.store().visible().len(), 1);
        assert_eq!(app.selected_tool().map(|t| t.id), Some(3));

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.store().view().search_query, "cu");

        // 'q' is text while searching
        type_str(&mut app, "q");
        assert!(!app.state.should_quit);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state.mode, InputMode::Browse);
        assert_eq!(app.store().view().search_query, "cuq");
    }

    #[test]
    fn test_search_ctrl_u_clears() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "zzz");
        assert!(app.state.selected.is_none());

        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.store().view().search_query, "");
        assert_eq!(app.state.selected, Some(0));
    }

    #[test]
    fn test_search_ignores_control_and_alt_chords() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "ta");

        app.handle_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(app.store().view().search_query, "ta");
        assert_eq!(app.state.mode, InputMode::Search);

        app.handle_key(KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT));
        assert_eq!(app.store().view().search_query, "taB");
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.state.selected, Some(3));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state.selected, Some(0));
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.state.selected, Some(3));
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.state.selected, Some(0));
    }

    #[test]
    fn test_category_cycle() {
        let mut app = app();
        // chips: All, Chatbots, Coding, Image
        press(&mut app, KeyCode::Right);
        assert_eq!(app.store().view().category.label(), "Chatbots");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.store().view().category.label(), "Coding");
        assert_eq!(app.store().visible().len(), 2);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.store().view().category, CategoryFilter::All);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.store().view().category.label(), "Image");
    }

    #[test]
    fn test_toggle_bookmark_does_not_navigate() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.store().is_bookmarked(1));
        assert!(app.navigator().opened().is_empty());
        assert_eq!(app.store().storage().get(BOOKMARKS_KEY).unwrap().as_deref(), Some("[1]"));
        assert_eq!(app.state.status_message.as_deref(), Some("Bookmarked ChatGPT"));

        press(&mut app, KeyCode::Char(' '));
        assert!(!app.store().is_bookmarked(1));
    }

    #[test]
    fn test_open_selected() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator().opened(), &["https://example.com/3"]);
        assert!(!app.store().is_bookmarked(3));
    }

    #[test]
    fn test_open_with_empty_list_is_noop() {
        let mut app = app();
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Char('o'));
        assert!(app.navigator().opened().is_empty());
    }

    #[test]
    fn test_bookmarks_view_and_browse_all() {
        let mut app = app();
        press(&mut app, KeyCode::Char('b'));
        assert!(app.store().view().bookmarks_only);
        assert!(app.state.selected.is_none());

        press(&mut app, KeyCode::Esc);
        assert!(!app.store().view().bookmarks_only);
        assert_eq!(app.state.selected, Some(0));
    }

    #[test]
    fn test_unbookmark_in_bookmarks_view_clamps_selection() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.state.selected, Some(0));

        press(&mut app, KeyCode::Char(' '));
        assert!(app.store().visible().is_empty());
        assert!(app.state.selected.is_none());
    }

    #[test]
    fn test_clear_filters() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "nothing-matches");
        press(&mut app, KeyCode::Enter);
        assert!(app.store().visible().is_empty());

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.store().view().category, CategoryFilter::All);
        assert_eq!(app.store().view().search_query, "");
        assert_eq!(app.store().visible().len(), 4);
    }

    #[test]
    fn test_theme_toggle_persists() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.store().theme(), Theme::Dark);
        assert_eq!(app.store().storage().get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.state.mode, InputMode::Help);
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.state.mode, InputMode::Browse);
    }
}
