//! JSON file storage implementation.
//!
//! Each key is stored as `<root>/<key>.json` containing a pretty-printed
//! JSON array.

use std::path::{Path, PathBuf};
use serde::{de::DeserializeOwned, Serialize};
use streakline_core::{Quote, Tracker};
use super::{Storage, Result, TRACKERS_KEY, QUOTES_KEY};
use tokio::fs;
use tracing::debug;

/// File-based JSON storage backend.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Create storage rooted at `root`, creating the directory if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Storage directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    async fn read_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let path = self.key_path(key);
        match fs::read_to_string(&path).await {
            Ok(json) => {
                let items: Vec<T> = serde_json::from_str(&json)?;
                debug!(key, count = items.len(), "loaded list");
                Ok(items)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(key, "no stored list");
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn write_list<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let path = self.key_path(key);
        let json = serde_json::to_string_pretty(items)?;

        // Temp file plus rename: readers never see a partial list.
        let tmp = self.root.join(format!("{}.json.tmp", key));
        fs::write(&tmp, json.as_bytes()).await?;
        fs::rename(&tmp, &path).await?;

        debug!(key, count = items.len(), "saved list");
        Ok(())
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn load_trackers(&self) -> Result<Vec<Tracker>> {
        self.read_list(TRACKERS_KEY).await
    }

    async fn save_trackers(&mut self, trackers: &[Tracker]) -> Result<()> {
        self.write_list(TRACKERS_KEY, trackers).await
    }

    async fn load_quotes(&self) -> Result<Vec<Quote>> {
        self.read_list(QUOTES_KEY).await
    }

    async fn save_quotes(&mut self, quotes: &[Quote]) -> Result<()> {
        self.write_list(QUOTES_KEY, quotes).await
    }
}
