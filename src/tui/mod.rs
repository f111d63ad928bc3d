//! Terminal User Interface for Tooldir.
//!
//! A single view with three parts:
//! - **Header**: search box, category chips, bookmark and theme indicators
//! - **Tool list**: the visible tools, featured first
//! - **Tool card**: details of the selected tool
//!
//! The loop is synchronous: render, wait for one event, apply it.

mod app;
mod events;
mod runner;
mod state;
mod views;

pub use app::App;
pub use events::{Event, EventHandler};
pub use runner::TuiRunner;
pub use state::{AppState, EmptyState, InputMode};
pub use views::{Screen, render};

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::Result;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};

use crate::domain::{TagKind, Theme};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// Enables raw mode and switches to the alternate screen.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
///
/// Disables raw mode and leaves the alternate screen.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    pub accent: Color,
    pub selection: Color,
    pub featured: Color,
    pub bookmark: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(248, 250, 252),
        text: Color::Rgb(17, 24, 39),
        dim: Color::Rgb(107, 114, 128),
        border: Color::Rgb(209, 213, 219),
        accent: Color::Rgb(59, 130, 246),
        selection: Color::Rgb(219, 234, 254),
        featured: Color::Rgb(124, 58, 237),
        bookmark: Color::Rgb(37, 99, 235),
    };

    pub const DARK: Palette = Palette {
        background: Color::Rgb(17, 24, 39),
        text: Color::Rgb(243, 244, 246),
        dim: Color::Rgb(156, 163, 175),
        border: Color::Rgb(55, 65, 81),
        accent: Color::Rgb(96, 165, 250),
        selection: Color::Rgb(30, 58, 138),
        featured: Color::Rgb(167, 139, 250),
        bookmark: Color::Rgb(96, 165, 250),
    };

    /// Palette for `theme`
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }

    /// Badge color for a tag
    pub fn tag(&self, kind: TagKind) -> Color {
        match kind {
            TagKind::Popular => Color::Rgb(59, 130, 246), // Blue
            TagKind::Free => Color::Rgb(22, 163, 74),     // Green
            TagKind::New => Color::Rgb(147, 51, 234),     // Purple
            TagKind::Paid => Color::Rgb(234, 88, 12),     // Orange
            TagKind::Freemium => Color::Rgb(13, 148, 136), // Teal
            TagKind::OpenSource | TagKind::Other => self.dim,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_per_theme() {
        assert_eq!(Palette::for_theme(Theme::Light), Palette::LIGHT);
        assert_eq!(Palette::for_theme(Theme::Dark), Palette::DARK);
        assert_ne!(Palette::LIGHT.background, Palette::DARK.background);
    }

    #[test]
    fn test_tag_colors() {
        let palette = Palette::LIGHT;
        assert_ne!(palette.tag(TagKind::Popular), palette.tag(TagKind::Free));
        assert_eq!(palette.tag(TagKind::OpenSource), palette.dim);
        assert_eq!(palette.tag(TagKind::Other), palette.dim);
    }
}
