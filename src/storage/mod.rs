// Local key-value storage
//
// String-valued store standing in for browser local storage. The endpoint
// registry only reads from it; the CLI endpoint flags write to it.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::endpoints::CUSTOM_ENDPOINT_KEY;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("malformed storage data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage entry {0} is not a string")]
    NotAString(String),
}

pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
    fn list(&self) -> Result<Vec<String>, StorageError>;
}

/// In-memory store, used with `--no-persist` and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.entries.keys().cloned().collect())
    }
}

/// File-backed store: one JSON object of string values
///
/// The file is read on every access so that edits made by another
/// process are picked up; a missing file is an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/parascope/storage.json`, if the platform has a data dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("parascope").join("storage.json"))
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn read_all(&self) -> Result<Map<String, Value>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, map: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let content = serde_json::to_string_pretty(map)?;

        // Atomic replace: readers see the old file or the new one
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(content.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;
        Ok(())
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.read_all()?.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(StorageError::NotAString(key.to_string())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.read_all()?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_all(&map)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut map = self.read_all()?;
        if map.remove(key).is_some() {
            self.write_all(&map)?;
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.read_all()?.keys().cloned().collect())
    }
}

/// Read the persisted custom endpoint URLs (strict: errors propagate)
pub fn custom_endpoints(store: &dyn KvStore) -> Result<Vec<String>, StorageError> {
    match store.get(CUSTOM_ENDPOINT_KEY)? {
        Some(raw) if !raw.is_empty() => Ok(serde_json::from_str(&raw)?),
        _ => Ok(Vec::new()),
    }
}

/// Append a custom endpoint URL; returns false if it was already stored
pub fn add_custom_endpoint(store: &mut dyn KvStore, url: &str) -> Result<bool, StorageError> {
    let mut urls = custom_endpoints(store)?;
    if urls.iter().any(|u| u == url) {
        return Ok(false);
    }

    urls.push(url.to_string());
    store.set(CUSTOM_ENDPOINT_KEY, &serde_json::to_string(&urls)?)?;
    tracing::info!(url, "Stored custom endpoint");
    Ok(true)
}

/// Remove a custom endpoint URL; returns false if it was not stored
pub fn remove_custom_endpoint(store: &mut dyn KvStore, url: &str) -> Result<bool, StorageError> {
    let mut urls = custom_endpoints(store)?;
    let before = urls.len();
    urls.retain(|u| u != url);
    if urls.len() == before {
        return Ok(false);
    }

    if urls.is_empty() {
        store.remove(CUSTOM_ENDPOINT_KEY)?;
    } else {
        store.set(CUSTOM_ENDPOINT_KEY, &serde_json::to_string(&urls)?)?;
    }
    tracing::info!(url, "Removed custom endpoint");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("a").unwrap(), None);
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(store.list().unwrap(), vec!["a".to_string(), "b".to_string()]);
        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nope.json"));
        assert_eq!(store.get(CUSTOM_ENDPOINT_KEY).unwrap(), None);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut store = FileStore::new(&path);
        store.set("k", "v").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store_replaces_file_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"old": "value"}"#).unwrap();

        let mut store = FileStore::new(&path);
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("old").unwrap();

        let written: Map<String, Value> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(written["b"], Value::String("2".to_string()));

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("storage.json")]);
    }

    #[test]
    fn test_file_store_rejects_non_string_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"k": 5}"#).unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.get("k"), Err(StorageError::NotAString(_))));
    }

    #[test]
    fn test_file_store_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.get("k"), Err(StorageError::Json(_))));
    }

    #[test]
    fn test_add_and_remove_custom_endpoint() {
        let mut store = MemoryStore::new();

        assert!(add_custom_endpoint(&mut store, "wss://a").unwrap());
        assert!(add_custom_endpoint(&mut store, "wss://b").unwrap());
        assert!(!add_custom_endpoint(&mut store, "wss://a").unwrap());
        assert_eq!(
            store.get(CUSTOM_ENDPOINT_KEY).unwrap().as_deref(),
            Some(r#"["wss://a","wss://b"]"#)
        );

        assert!(remove_custom_endpoint(&mut store, "wss://a").unwrap());
        assert!(!remove_custom_endpoint(&mut store, "wss://zzz").unwrap());
        assert_eq!(custom_endpoints(&store).unwrap(), vec!["wss://b".to_string()]);

        assert!(remove_custom_endpoint(&mut store, "wss://b").unwrap());
        assert_eq!(store.get(CUSTOM_ENDPOINT_KEY).unwrap(), None);
    }

    #[test]
    fn test_add_custom_endpoint_refuses_malformed_list() {
        let mut store = MemoryStore::new();
        store.set(CUSTOM_ENDPOINT_KEY, "not-a-list").unwrap();
        assert!(add_custom_endpoint(&mut store, "wss://a").is_err());
    }
}
