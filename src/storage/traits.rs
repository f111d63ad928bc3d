//! Storage trait definitions.

use crate::error::Result;

/// Durable key-value storage of serialized text.
///
/// Mirrors browser local storage: values are opaque strings under fixed keys,
/// and a missing key reads as `None`.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
