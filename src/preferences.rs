//! Preference persistence for saving and restoring user settings between sessions
//!
//! This module provides the key-value string store behind user-facing settings
//! such as the selected app icon. The file-backed store keeps the whole map in
//! memory and writes through to disk on every put, so reads never touch the
//! filesystem after construction.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Preference key holding the active app icon id
pub const PREFERENCE_APP_ICON: &str = "pocketCastsAppIcon";

/// Preference store error type
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// Failed to read the preference file
    #[error("Failed to read preference file: {0}")]
    Read(#[source] std::io::Error),

    /// Failed to write the preference file
    #[error("Failed to write preference file: {0}")]
    Write(#[source] std::io::Error),

    /// Preference file contents could not be parsed
    #[error("Failed to parse preference file: {0}")]
    Parse(#[from] serde_json::Error),

    /// No platform data directory available
    #[error("Could not determine local data directory")]
    NoDataDir,
}

/// Key-value string store with get-or-default reads and write-through puts
pub trait PreferenceStore {
    /// Get a string preference, returning `default` when the key is absent
    fn get_string(&self, key: &str, default: &str) -> String;

    /// Set a string preference, persisting it synchronously
    fn put_string(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// On-disk layout of the preference file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferenceFile {
    /// Application version when preferences were last saved
    app_version: String,

    /// When the preferences were last saved
    last_saved: DateTime<Utc>,

    /// Preference entries
    values: HashMap<String, String>,
}

/// File-backed preference store
///
/// The backing file is loaded eagerly at construction; every put rewrites it.
pub struct FilePreferenceStore {
    /// Path to the preference file
    path: PathBuf,

    /// In-memory copy of the persisted entries
    values: HashMap<String, String>,
}

impl FilePreferenceStore {
    /// Create a store backed by the default platform path
    pub fn new() -> Result<Self, PreferenceError> {
        Self::with_path(default_preference_path()?)
    }

    /// Create a store backed by a specific file path
    ///
    /// A missing file is not an error; the store starts empty and the file is
    /// created on the first put.
    pub fn with_path(path: PathBuf) -> Result<Self, PreferenceError> {
        let values = if path.exists() {
            let json = fs::read_to_string(&path).map_err(PreferenceError::Read)?;
            let file: PreferenceFile = serde_json::from_str(&json)?;
            log::info!(
                "Loaded {} preference entries from {}",
                file.values.len(),
                path.display()
            );
            file.values
        } else {
            log::info!("No preference file at {}, starting empty", path.display());
            HashMap::new()
        };

        Ok(Self { path, values })
    }

    /// Get the path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current entries to disk
    fn flush(&self) -> Result<(), PreferenceError> {
        let file = PreferenceFile {
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            last_saved: Utc::now(),
            values: self.values.clone(),
        };

        let json = serde_json::to_string_pretty(&file)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(PreferenceError::Write)?;
        }
        fs::write(&self.path, json).map_err(PreferenceError::Write)?;

        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get_string(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn put_string(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        log::debug!("Persisting preference {}={}", key, value);
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// In-memory preference store for tests and demos
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with entries
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_string(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn put_string(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Get the default preference file path
pub fn default_preference_path() -> Result<PathBuf, PreferenceError> {
    let data_dir = dirs_next::data_local_dir().ok_or(PreferenceError::NoDataDir)?;
    Ok(data_dir.join("RustCasts").join("preferences.json"))
}
