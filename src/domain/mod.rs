//! Domain types for Tooldir
//!
//! - Tool: one read-only catalog entry
//! - TagKind: badge classification for well-known tags
//! - Theme: light or dark presentation

pub mod theme;
pub mod tool;

pub use theme::Theme;
pub use tool::{TagKind, Tool, ToolId};
