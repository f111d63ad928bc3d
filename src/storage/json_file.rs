//! File-backed key-value storage.
//!
//! All keys live in one JSON object on disk. The file is loaded once on open
//! and replaced in full on every change: the new content goes to a sibling
//! temp file which is then renamed over the old one.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::traits::KeyValueStore;
use crate::error::{Error, Result};

/// Key-value store persisted as a single JSON object file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating parent directories as needed.
    ///
    /// A missing file is an empty store. A file that does not parse as a
    /// JSON object of strings is treated the same way and replaced on the
    /// next write.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Ignoring unreadable storage file {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        debug!("Opened storage {} with {} keys", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    /// Rewrite the whole file from memory.
    fn flush(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        let temp = self.temp_path();
        fs::write(&temp, content)?;
        fs::rename(&temp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp);
            Error::Storage(format!("replacing {}: {}", self.path.display(), e))
        })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::open(temp.path().join("storage.json")).unwrap();
        assert_eq!(store.get("bookmarkedTools").unwrap(), None);
    }

    #[test]
    fn test_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("storage.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("darkMode", "true").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("storage.json");

        {
            let mut store = JsonFileStore::open(&path).unwrap();
            store.set("bookmarkedTools", "[3,1]").unwrap();
            store.set("darkMode", "true").unwrap();
        }

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("bookmarkedTools").unwrap().as_deref(), Some("[3,1]"));
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("storage.json");

        {
            let mut store = JsonFileStore::open(&path).unwrap();
            store.set("darkMode", "true").unwrap();
            store.set("bookmarkedTools", "[2]").unwrap();
            assert_eq!(store.path(), path.as_path());
            assert!(!store.temp_path().exists());
        }

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("storage.json")]);

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("true"));
        assert_eq!(store.get("bookmarkedTools").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_failed_replace_is_storage_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("storage.json");
        let mut store = JsonFileStore::open(&path).unwrap();

        // a non-empty directory in place of the file cannot be renamed over
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let err = store.set("darkMode", "true").unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
        assert!(!store.temp_path().exists());
        // the in-memory value still applies
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("storage.json");
        fs::write(&path, "not json at all").unwrap();

        let mut store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("darkMode").unwrap(), None);

        store.set("darkMode", "false").unwrap();
        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("darkMode").unwrap().as_deref(), Some("false"));
    }
}
