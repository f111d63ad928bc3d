//! TUI Views
//!
//! Panels for the single catalog view: header, tool list, tool card and
//! status bar, plus the help overlay.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use super::Palette;
use super::state::{EmptyState, InputMode};
use crate::catalog::{Bookmarks, CategoryFilter, ViewState};
use crate::catalog::filter::ALL_CATEGORIES;
use crate::domain::{TagKind, Tool};

const APP_TITLE: &str = "AI Tools Directory";

/// Everything the views read, borrowed from the app for one frame.
pub struct Screen<'a> {
    /// Visible tools in display order
    pub visible: Vec<&'a Tool>,
    /// Category chips after "All"
    pub categories: &'a [String],
    pub view: &'a ViewState,
    pub bookmarks: &'a Bookmarks,
    /// Index into `visible`
    pub selected: Option<usize>,
    pub mode: InputMode,
    pub status: Option<&'a str>,
}

impl Screen<'_> {
    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.view.theme)
    }

    pub fn heading(&self) -> &'static str {
        if self.view.bookmarks_only {
            "Bookmarked Tools"
        } else {
            "Discover AI Tools"
        }
    }

    /// "N tools found", singular for one
    pub fn count_label(&self) -> String {
        let count = self.visible.len();
        format!("{} tool{} found", count, if count == 1 { "" } else { "s" })
    }

    /// Placeholder to show instead of the list, if any.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.view.bookmarks_only && self.bookmarks.is_empty() {
            Some(EmptyState::NoBookmarks)
        } else if !self.view.bookmarks_only && self.visible.is_empty() && !self.view.search_query.is_empty() {
            Some(EmptyState::NoMatches)
        } else {
            None
        }
    }

    pub fn selected_tool(&self) -> Option<&Tool> {
        self.selected.and_then(|i| self.visible.get(i).copied())
    }
}

/// Trait for renderable panels
pub trait View {
    /// Render the panel to the frame
    fn render(&self, frame: &mut Frame, area: Rect, screen: &Screen);

    /// Get the panel title
    fn title(&self) -> &'static str;
}

/// Render the whole screen.
pub fn render(frame: &mut Frame, screen: &Screen) {
    let palette = screen.palette();
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(6), Constraint::Length(1)])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    HeaderView.render(frame, rows[0], screen);
    ToolListView.render(frame, body[0], screen);
    ToolCardView.render(frame, body[1], screen);
    StatusBarView.render(frame, rows[2], screen);

    if screen.mode == InputMode::Help {
        HelpView.render(frame, area, screen);
    }
}

fn panel<'a>(title: impl Into<Line<'a>>, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(title)
}

/// Search box, category chips, bookmark and theme indicators
pub struct HeaderView;

impl HeaderView {
    fn chip(label: &str, selected: bool, palette: &Palette) -> Span<'static> {
        let style = if selected {
            Style::default()
                .fg(palette.background)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.dim)
        };
        Span::styled(format!(" {} ", label), style)
    }

    fn chips_line(screen: &Screen, palette: &Palette) -> Line<'static> {
        let selected = &screen.view.category;
        let mut spans = vec![Self::chip(ALL_CATEGORIES, *selected == CategoryFilter::All, palette)];
        for category in screen.categories {
            let is_selected = matches!(selected, CategoryFilter::Only(c) if c == category);
            spans.push(Span::raw(" "));
            spans.push(Self::chip(category, is_selected, palette));
        }
        Line::from(spans)
    }
}

impl View for HeaderView {
    fn render(&self, frame: &mut Frame, area: Rect, screen: &Screen) {
        let palette = screen.palette();
        let searching = screen.mode == InputMode::Search;

        let search = if screen.view.search_query.is_empty() && !searching {
            Span::styled("Search AI tools by type or name... (/)", Style::default().fg(palette.dim))
        } else {
            Span::raw(format!("{}{}", screen.view.search_query, if searching { "_" } else { "" }))
        };

        let bookmark_style = if screen.view.bookmarks_only {
            Style::default().fg(palette.bookmark).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.dim)
        };
        let theme_glyph = if screen.view.theme.is_dark() { "☀" } else { "☾" };

        let lines = vec![
            Line::from(vec![
                Span::styled(APP_TITLE, Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled("[b] Bookmarks", bookmark_style),
                Span::raw("  "),
                Span::styled(format!("[t] {}", theme_glyph), Style::default().fg(palette.dim)),
            ]),
            Line::from(vec![Span::styled("Search: ", Style::default().fg(palette.dim)), search]),
            Self::chips_line(screen, &palette),
        ];

        let border = if searching { palette.accent } else { palette.border };
        let header = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(header, area);
    }

    fn title(&self) -> &'static str {
        "Header"
    }
}

/// The visible tools, one row each
pub struct ToolListView;

impl ToolListView {
    fn format_row<'a>(tool: &'a Tool, bookmarked: bool, palette: &Palette) -> ListItem<'a> {
        let marker = if bookmarked {
            Span::styled("[*] ", Style::default().fg(palette.bookmark))
        } else {
            Span::styled("[ ] ", Style::default().fg(palette.dim))
        };

        let mut spans = vec![marker, Span::styled(tool.name.as_str(), Style::default().add_modifier(Modifier::BOLD))];
        if tool.featured {
            spans.push(Span::styled(" Featured", Style::default().fg(palette.featured)));
        }
        spans.push(Span::styled(format!("  {}", tool.category), Style::default().fg(palette.dim)));

        ListItem::new(Line::from(spans))
    }

    fn render_empty(frame: &mut Frame, area: Rect, empty: EmptyState, block: Block, palette: &Palette) {
        let (action, key) = empty.action();
        let lines = vec![
            Line::raw(""),
            Line::styled(empty.title(), Style::default().add_modifier(Modifier::BOLD)),
            Line::styled(empty.hint(), Style::default().fg(palette.dim)),
            Line::raw(""),
            Line::styled(format!("[{}] {}", key, action), Style::default().fg(palette.accent)),
        ];
        let message = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(message, area);
    }
}

impl View for ToolListView {
    fn render(&self, frame: &mut Frame, area: Rect, screen: &Screen) {
        let palette = screen.palette();
        let block = panel(format!(" {} - {} ", screen.heading(), screen.count_label()), &palette);

        if let Some(empty) = screen.empty_state() {
            Self::render_empty(frame, area, empty, block, &palette);
            return;
        }

        let items: Vec<ListItem> = screen
            .visible
            .iter()
            .map(|tool| Self::format_row(tool, screen.bookmarks.contains(tool.id), &palette))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(palette.selection).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(screen.selected);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn title(&self) -> &'static str {
        "Tools"
    }
}

/// Details of the selected tool
pub struct ToolCardView;

impl ToolCardView {
    fn card_lines<'a>(tool: &'a Tool, bookmarked: bool, palette: &Palette) -> Vec<Line<'a>> {
        let mut heading = vec![Span::styled(
            tool.name.as_str(),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )];
        if tool.featured {
            heading.push(Span::raw(" "));
            heading.push(Span::styled(
                " Featured ",
                Style::default().fg(palette.background).bg(palette.featured),
            ));
        }

        let mut tags = Vec::new();
        for tag in &tool.tags {
            if !tags.is_empty() {
                tags.push(Span::raw(" "));
            }
            tags.push(Span::styled(
                format!("[{}]", tag),
                Style::default().fg(palette.tag(TagKind::of(tag))),
            ));
        }

        let bookmark = if bookmarked {
            Span::styled("Bookmarked - [space] Remove Bookmark", Style::default().fg(palette.bookmark))
        } else {
            Span::styled("[space] Add Bookmark", Style::default().fg(palette.dim))
        };

        vec![
            Line::from(heading),
            Line::styled(tool.category.as_str(), Style::default().fg(palette.dim)),
            Line::raw(""),
            Line::raw(tool.description.as_str()),
            Line::raw(""),
            Line::from(tags),
            Line::raw(""),
            Line::from(vec![Span::styled("Website: ", Style::default().fg(palette.dim)), Span::raw(tool.website.as_str())]),
            Line::from(vec![Span::styled("Logo:    ", Style::default().fg(palette.dim)), Span::raw(tool.logo.as_str())]),
            Line::raw(""),
            Line::from(bookmark),
            Line::styled("[enter] Visit Tool", Style::default().fg(palette.accent)),
        ]
    }
}

impl View for ToolCardView {
    fn render(&self, frame: &mut Frame, area: Rect, screen: &Screen) {
        let palette = screen.palette();
        let block = panel(" Tool ", &palette);

        let content = match screen.selected_tool() {
            Some(tool) => Paragraph::new(Self::card_lines(tool, screen.bookmarks.contains(tool.id), &palette)),
            None => Paragraph::new("No tool selected").style(Style::default().fg(palette.dim)),
        };
        frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
    }

    fn title(&self) -> &'static str {
        "Tool"
    }
}

/// Mode, key hints and the last status message
pub struct StatusBarView;

impl View for StatusBarView {
    fn render(&self, frame: &mut Frame, area: Rect, screen: &Screen) {
        let palette = screen.palette();
        let hints = match screen.mode {
            InputMode::Search => "enter/esc done  ctrl-u clear",
            _ => "/ search  h/l category  b bookmarks  space bookmark  enter open  t theme  ? help  q quit",
        };

        let mut spans = vec![Span::styled(hints, Style::default().fg(palette.dim))];
        if let Some(status) = screen.status {
            spans.push(Span::raw("  │ "));
            spans.push(Span::styled(status, Style::default().fg(palette.accent)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn title(&self) -> &'static str {
        "Status"
    }
}

/// Key binding overlay
pub struct HelpView;

impl HelpView {
    const BINDINGS: [(&'static str, &'static str); 12] = [
        ("/", "Search (enter/esc to finish)"),
        ("j/k, ↑/↓", "Move selection"),
        ("g/G", "First / last tool"),
        ("h/l, ←/→, tab", "Previous / next category"),
        ("b", "Toggle bookmarks view"),
        ("a", "Browse all tools"),
        ("space", "Toggle bookmark"),
        ("enter, o", "Open website"),
        ("c", "Clear filters"),
        ("t", "Toggle theme"),
        ("?", "Help"),
        ("q, ctrl-c", "Quit"),
    ];

    fn popup_area(area: Rect) -> Rect {
        let width = area.width.min(56);
        let height = area.height.min(Self::BINDINGS.len() as u16 + 4);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

impl View for HelpView {
    fn render(&self, frame: &mut Frame, area: Rect, screen: &Screen) {
        let palette = screen.palette();
        let popup = Self::popup_area(area);

        let lines: Vec<Line> = Self::BINDINGS
            .iter()
            .map(|(keys, action)| {
                Line::from(vec![
                    Span::styled(format!("{:>16}  ", keys), Style::default().fg(palette.accent)),
                    Span::raw(*action),
                ])
            })
            .collect();

        frame.render_widget(Clear, popup);
        let help = Paragraph::new(lines)
            .style(Style::default().bg(palette.background).fg(palette.text))
            .block(panel(" Help - any key to close ", &palette));
        frame.render_widget(help, popup);
    }

    fn title(&self) -> &'static str {
        "Help"
    }
}
