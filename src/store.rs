//! Key-value persistence for the roster and the draw settings.
//!
//! The draw logic never reads the store; callers load a snapshot and pass it in.

use crate::models::{DrawSettings, Roster};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Store key holding the roster (JSON array of players).
pub const ROSTER_KEY: &str = "roster";
/// Store key holding the draw settings (JSON object).
pub const SETTINGS_KEY: &str = "settings";

/// Errors from reading or writing the store.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// Keys may only contain ASCII letters, digits, `-` and `_`.
    InvalidKey(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "Storage error: {}", e),
            StoreError::Json(e) => write!(f, "Stored data is invalid: {}", e),
            StoreError::InvalidKey(k) => write!(f, "Invalid storage key: {}", k),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Json(e) => Some(e),
            StoreError::InvalidKey(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

/// A string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Value for `key`, or `None` if nothing was saved yet.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store; contents are lost on exit.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let g = self
            .entries
            .read()
            .map_err(|_| StoreError::Io(std::io::Error::other("lock error")))?;
        Ok(g.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut g = self
            .entries
            .write()
            .map_err(|_| StoreError::Io(std::io::Error::other("lock error")))?;
        g.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key under a directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use `dir` for storage, creating it if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        // Write to a sibling temp file, then rename into place.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// Load the roster; an empty roster if none was saved.
pub fn load_roster(store: &dyn KeyValueStore) -> Result<Roster, StoreError> {
    match store.load(ROSTER_KEY)? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Roster::new()),
    }
}

pub fn save_roster(store: &dyn KeyValueStore, roster: &Roster) -> Result<(), StoreError> {
    store.save(ROSTER_KEY, &serde_json::to_string(roster)?)
}

/// Load the draw settings. Fields missing from the saved JSON take their defaults.
pub fn load_settings(store: &dyn KeyValueStore) -> Result<DrawSettings, StoreError> {
    match store.load(SETTINGS_KEY)? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(DrawSettings::default()),
    }
}

pub fn save_settings(store: &dyn KeyValueStore, settings: &DrawSettings) -> Result<(), StoreError> {
    store.save(SETTINGS_KEY, &serde_json::to_string(settings)?)
}
