// ClientDesk - platform/store.rs
//
// File-backed key/value store: a single JSON object mapping keys to string
// values, kept in the platform data directory.
//
// - Every write is a read-modify-write of the whole file, written atomically
//   (write temp file, then rename) so a crash never leaves a torn file.
// - Read errors and corrupt content behave like an empty store; the next
//   successful write replaces the bad file.
// - The data directory is created on first write.

use crate::core::store::KeyValueStore;
use crate::util::constants::MAX_STORAGE_FILE_SIZE;
use crate::util::error::StoreError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Key/value store persisted to one JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole value map. Any failure yields an empty map.
    fn read_map(&self) -> BTreeMap<String, String> {
        match std::fs::metadata(&self.path) {
            Ok(meta) if meta.len() > MAX_STORAGE_FILE_SIZE => {
                tracing::warn!(
                    path = %self.path.display(),
                    size = meta.len(),
                    max = MAX_STORAGE_FILE_SIZE,
                    "Storage file too large, ignoring it"
                );
                return BTreeMap::new();
            }
            Ok(_) => {}
            Err(e) => {
                // "Not found" is the normal first run.
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::debug!(path = %self.path.display(), error = %e, "Cannot stat storage file");
                }
                return BTreeMap::new();
            }
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "Cannot read storage file");
                return BTreeMap::new();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "Storage file is malformed, treating it as empty"
            );
            BTreeMap::new()
        })
    }

    /// Write the whole value map atomically.
    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                    path: parent.to_path_buf(),
                    operation: "create directory",
                    source: e,
                })?;
            }
        }

        let json = serde_json::to_string_pretty(map)
            .map_err(|e| StoreError::Serialize { source: e })?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json.as_bytes()).map_err(|e| StoreError::Io {
            path: tmp.clone(),
            operation: "write",
            source: e,
        })?;

        std::fs::rename(&tmp, &self.path).map_err(|e| {
            // Clean up the temp file; a secondary error here changes nothing.
            let _ = std::fs::remove_file(&tmp);
            StoreError::Io {
                path: self.path.clone(),
                operation: "rename",
                source: e,
            }
        })?;

        tracing::debug!(path = %self.path.display(), keys = map.len(), "Storage saved");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map().remove(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.read_map();
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }
}
