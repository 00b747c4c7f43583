//! # Settings Storage
//!
//! String key/value backends. The `directories` crate resolves the
//! platform-appropriate config directory for the file-backed store.

use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A string key/value store.
pub trait SettingsStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: SettingsStorage + ?Sized> SettingsStorage for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

/// Storage persisted as a flat JSON object of strings.
///
/// The file is read on every access so that edits made by another process
/// are picked up.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Storage at the default location in the user's config directory.
    pub fn new() -> Result<Self> {
        Ok(Self::at(Self::default_path()?))
    }

    /// Storage at a specific path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the default storage file path.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "passport-helper")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("storage.json"))
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read storage file: {}", self.path.display()))?;
        let items = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse storage file: {}", self.path.display()))?;
        Ok(items)
    }
}

impl SettingsStorage for JsonFileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let mut items = match self.read_all() {
            Ok(items) => items,
            Err(e) => {
                // A corrupt file is replaced rather than blocking every write
                warn!("Replacing unreadable storage: {:#}", e);
                BTreeMap::new()
            }
        };
        items.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create storage directory: {}", parent.display())
            })?;
        }

        let contents =
            serde_json::to_string_pretty(&items).context("Failed to serialize storage")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write storage file: {}", self.path.display()))?;

        Ok(())
    }
}

/// In-memory storage, lost on exit.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
