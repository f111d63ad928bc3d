//! TUI Runner - main event loop.
//!
//! The `TuiRunner` owns the terminal, app, and event handler. It runs the
//! main loop: render → wait for an event → apply it → repeat.

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views::render;
use crate::navigate::Navigator;
use crate::storage::KeyValueStore;
use eyre::Result;
use log::info;

/// Main TUI runner that owns the event loop.
pub struct TuiRunner<S: KeyValueStore, N: Navigator> {
    /// The terminal instance
    terminal: Tui,
    /// Application state and input handling
    app: App<S, N>,
    /// Event handler for keyboard and tick events
    event_handler: EventHandler,
}

impl<S: KeyValueStore, N: Navigator> TuiRunner<S, N> {
    /// Create a new TUI runner.
    pub fn new(terminal: Tui, app: App<S, N>, tick_rate_ms: u64) -> Self {
        Self {
            terminal,
            app,
            event_handler: EventHandler::new(tick_rate_ms),
        }
    }

    /// Run the main TUI loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        info!("Starting TUI main loop");

        loop {
            self.terminal.draw(|f| render(f, &self.app.screen()))?;

            match self.event_handler.next()? {
                Event::Key(key) => {
                    if self.app.handle_key(key) {
                        break;
                    }
                }
                // Redrawn at the top of the loop
                Event::Tick | Event::Resize(_, _) => {}
            }
        }

        info!("TUI main loop ended");
        Ok(())
    }
}
