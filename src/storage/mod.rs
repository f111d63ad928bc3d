//! Storage layer for Tooldir - durable key-value persistence.
//!
//! Values are serialized JSON text under fixed keys. Reads are lenient: a
//! missing or unparseable value is reported as absent so callers fall back
//! to their defaults.

mod json_file;
mod memory;
mod traits;

use log::warn;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::Result;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;

/// Key holding the bookmarked tool ids
pub const BOOKMARKS_KEY: &str = "bookmarkedTools";

/// Key holding the dark theme flag
pub const DARK_MODE_KEY: &str = "darkMode";

/// Read and deserialize the value under `key`.
///
/// Storage errors and malformed values are logged and read as `None`.
pub fn read_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!("Failed to read '{}' from storage: {}", key, e);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring malformed value for '{}': {}", key, e);
            None
        }
    }
}

/// Serialize `value` and store it under `key`.
pub fn write_json<T: Serialize + ?Sized>(store: &mut impl KeyValueStore, key: &str, value: &T) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
