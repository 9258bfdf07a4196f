//! Key-value storage backends
//!
//! A small synchronous string store in the spirit of browser local storage:
//! values are opaque strings addressed by key.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur when reading or writing storage
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize storage: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid storage path: {0}")]
    InvalidPath(String),
}

/// Synchronous string key-value store
pub trait KeyValueStore {
    /// Value stored under `key`, `None` when absent
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// In-process storage
///
/// Clones share the same entries, so a test can keep a handle and inspect what
/// a controller wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.into(), value.into());
        storage
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage persisted as a JSON object file (`{"key": "value"}`)
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all entries; a missing file is empty, a corrupt one is `Err`
    fn read_entries(&self) -> StoreResult<Result<BTreeMap<String, String>, serde_json::Error>> {
        if !self.path.exists() {
            return Ok(Ok(BTreeMap::new()));
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Ok(BTreeMap::new()));
        }

        Ok(serde_json::from_str(&content))
    }

    /// Atomic write: temp file in the same directory, then persist over the target
    fn write_entries(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        use tempfile::NamedTempFile;

        let content = serde_json::to_string_pretty(entries)?;

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            Some(_) => Path::new("."),
            None => {
                return Err(StoreError::InvalidPath(
                    self.path.to_string_lossy().to_string(),
                ))
            }
        };
        fs::create_dir_all(parent)?;

        let mut temp_file = NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.flush()?;
        temp_file
            .persist(&self.path)
            .map_err(|e| StoreError::Io(e.error))?;

        Ok(())
    }
}

impl KeyValueStore for FileStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        match self.read_entries()? {
            Ok(mut entries) => Ok(entries.remove(key)),
            Err(e) => {
                eprintln!(
                    "Warning: Failed to parse {}: {}. Treating storage as empty.",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = match self.read_entries()? {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to parse {}: {}. Backing up and starting fresh.",
                    self.path.display(),
                    e
                );

                let backup_path = self.path.with_extension("json.bak");
                if let Err(backup_err) = fs::rename(&self.path, &backup_path) {
                    eprintln!("Warning: Failed to backup corrupt file: {}", backup_err);
                }

                BTreeMap::new()
            }
        };

        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}
