use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::services::StorageService;

/// Volatile key-value store, gone with the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageService for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}

/// Device-local key-value store kept as a JSON object on disk.
///
/// The whole file is loaded on open and replaced on every change, so values
/// survive restarts the way browser local storage does.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    pub fn open(path: &Path) -> Result<Self> {
        let items = if path.exists() {
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read storage file {}", path.display()))?;
            parse_items(path, &data)
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            items,
        })
    }

    /// Write `items` to a sibling temp file, then rename it over the store.
    fn flush(&self, items: &BTreeMap<String, String>) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create storage directory {}", parent.display()))?;

        let json = serde_json::to_string_pretty(items)?;
        let mut tmp = NamedTempFile::new_in(parent)
            .with_context(|| format!("Failed to create temp file in {}", parent.display()))?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to write storage file {}", self.path.display()))?;

        log::debug!("Saved {} item(s) to {}", items.len(), self.path.display());
        Ok(())
    }
}

/// Values are kept as strings: non-string JSON values are stored in their
/// JSON text form, and a file that is not a JSON object counts as empty.
fn parse_items(path: &Path, data: &str) -> BTreeMap<String, String> {
    if data.trim().is_empty() {
        return BTreeMap::new();
    }
    match serde_json::from_str::<Value>(data) {
        Ok(Value::Object(map)) => map
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect(),
        Ok(_) => {
            log::warn!("Storage file {} is not a JSON object, starting empty", path.display());
            BTreeMap::new()
        }
        Err(e) => {
            log::warn!("Storage file {} is not valid JSON, starting empty: {}", path.display(), e);
            BTreeMap::new()
        }
    }
}

impl StorageService for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.clone();
        items.insert(key.to_string(), value.to_string());
        self.flush(&items)?;
        self.items = items;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        if !self.items.contains_key(key) {
            return Ok(());
        }
        let mut items = self.items.clone();
        items.remove(key);
        self.flush(&items)?;
        self.items = items;
        Ok(())
    }
}
