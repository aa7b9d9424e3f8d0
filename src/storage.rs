//! Preference storage - the single durable key-value facility the app uses
//!
//! This module provides:
//! - The `PreferenceStore` capability injected into stores
//! - File-backed preferences for desktop and mobile
//! - In-memory preferences for tests

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Durable key-value facility for user preferences.
///
/// Reads never fail: a missing or unreadable value is simply absent.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

// ============================================
// File Backend
// ============================================

/// One file per key under a preferences directory
#[derive(Debug, Clone)]
pub struct FilePreferences {
    root: PathBuf,
}

impl FilePreferences {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Preferences under `<data_dir>/preferences`, or the platform data dir
    pub fn in_data_dir(data_dir: Option<PathBuf>) -> Self {
        let base = data_dir.unwrap_or_else(default_data_dir);
        Self::new(base.join("preferences"))
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.pref", sanitize_key(key)))
    }
}

fn default_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        return data_dir.join("inwintors");
    }

    PathBuf::from("cache").join("inwintors")
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.root).map_err(|source| StorageError::Io {
            path: self.root.clone(),
            source,
        })?;
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|source| StorageError::Io { path, source })
    }
}

// ============================================
// Memory Backend
// ============================================

#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn with_value(key: &str, value: &str) -> Self {
        let prefs = Self::default();
        if let Ok(mut values) = prefs.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        prefs
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        let values = self.values.lock().ok()?;
        values.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The preference store the app runs against on this platform
pub fn platform_preferences(data_dir: Option<PathBuf>) -> Arc<dyn PreferenceStore> {
    Arc::new(FilePreferences::in_data_dir(data_dir))
}

/// Sanitize preference key for filesystem use
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}
