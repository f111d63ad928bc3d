//! Catalog state and its derived views.
//!
//! - `data`: loading the tool list
//! - `bookmarks`: the ordered bookmark set
//! - `filter`: view state and the pure visible-list derivation
//! - `store`: `CatalogStore`, which owns all of the above plus persistence

pub mod bookmarks;
pub mod data;
pub mod filter;
pub mod store;

pub use bookmarks::Bookmarks;
pub use data::{bundled_tools, load_tools};
pub use filter::{CategoryFilter, ViewState, categories, compare_tools, locale_cmp, visible_tools};
pub use store::CatalogStore;
