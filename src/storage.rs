//! Client-local preference storage
//!
//! This module provides:
//! - The `PreferenceStore` seam used by the theme controller
//! - `localStorage` on the web, a JSON file on native platforms
//! - An in-memory store for sessions without storage (and for tests)

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage rejected write: {0}")]
    Rejected(String),

    #[error("preferences file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("preferences file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Synchronous string key-value storage, shaped after the browser's
/// `localStorage`.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

// ============================================
// In-memory backend
// ============================================

/// Process-wide map backing `MemoryStore::session()`.
static SESSION_STORAGE: Lazy<Arc<Mutex<HashMap<String, String>>>> =
    Lazy::new(|| Arc::new(Mutex::new(HashMap::new())));

/// Map-backed store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store shared by the whole process; lives as long as the page does.
    pub fn session() -> Self {
        Self {
            entries: SESSION_STORAGE.clone(),
            read_only: false,
        }
    }

    /// A store whose writes always fail, like a browser with storage
    /// disabled or over quota.
    pub fn read_only() -> Self {
        Self {
            entries: Arc::default(),
            read_only: true,
        }
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        self
    }

    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Rejected(format!("'{key}' is read-only")));
        }
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Rejected(format!("'{key}' is read-only")));
        }
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

// ============================================
// File backend (native platforms)
// ============================================

/// All preferences in one JSON object on disk.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub const FILE_NAME: &'static str = "preferences.json";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(Self::FILE_NAME),
        }
    }

    /// Platform data directory, falling back to a local cache folder.
    pub fn default_dir() -> PathBuf {
        if let Some(data_dir) = dirs::data_local_dir() {
            return data_dir.join("medichat");
        }
        PathBuf::from("cache")
    }

    fn load(&self) -> Result<HashMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let body = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, body)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

// ============================================
// Browser backend (web)
// ============================================

#[cfg(target_arch = "wasm32")]
pub struct BrowserStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    /// `None` when there is no window or the browser denies `localStorage`.
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }
}

/// Best store for the current platform.
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_store(data_dir: Option<PathBuf>) -> Rc<dyn PreferenceStore> {
    let dir = data_dir.unwrap_or_else(FileStore::default_dir);
    Rc::new(FileStore::new(dir))
}

#[cfg(target_arch = "wasm32")]
pub fn platform_store(_data_dir: Option<std::path::PathBuf>) -> Rc<dyn PreferenceStore> {
    match BrowserStore::open() {
        Some(store) => Rc::new(store),
        None => {
            tracing::warn!("localStorage unavailable, theme will not survive a reload");
            Rc::new(MemoryStore::session())
        }
    }
}
