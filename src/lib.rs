//! Tooldir - a terminal catalog browser for AI tools
//!
//! Loads a bundled catalog of tools, derives a searchable, filterable view of
//! it and keeps bookmarks and the theme preference in a small key-value store.

pub mod catalog;
pub mod domain;
pub mod error;
pub mod navigate;
pub mod storage;
pub mod tui;

pub use error::{Error, Result};
