//! Storage trait abstraction.

use async_trait::async_trait;
use streakline_core::{Quote, Tracker, TrackerId};

/// Key holding the tracker list.
pub const TRACKERS_KEY: &str = "trackersList";

/// Key holding the quote list.
pub const QUOTES_KEY: &str = "quotesList";

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Item not found
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Storage abstraction for tracker and quote lists.
///
/// Each list is persisted whole under its own key; the provided methods
/// read, modify and write back the tracker list.
#[async_trait]
pub trait Storage: Send + Sync {
    // === Tracker operations ===

    /// Load every tracker, in stored order.
    async fn load_trackers(&self) -> Result<Vec<Tracker>>;

    /// Replace the stored tracker list.
    async fn save_trackers(&mut self, trackers: &[Tracker]) -> Result<()>;

    // === Quote operations ===

    /// Load every quote.
    async fn load_quotes(&self) -> Result<Vec<Quote>>;

    /// Replace the stored quote list.
    async fn save_quotes(&mut self, quotes: &[Quote]) -> Result<()>;

    // === Single-tracker helpers ===

    /// Find a tracker by id.
    async fn find_tracker(&self, id: &TrackerId) -> Result<Option<Tracker>> {
        Ok(self.load_trackers().await?.into_iter().find(|t| &t.id == id))
    }

    /// Append a tracker.
    async fn add_tracker(&mut self, tracker: &Tracker) -> Result<()> {
        let mut trackers = self.load_trackers().await?;
        trackers.push(tracker.clone());
        self.save_trackers(&trackers).await
    }

    /// Replace the tracker with the same id.
    async fn update_tracker(&mut self, tracker: &Tracker) -> Result<()> {
        let mut trackers = self.load_trackers().await?;
        let slot = trackers
            .iter_mut()
            .find(|t| t.id == tracker.id)
            .ok_or_else(|| StorageError::NotFound(tracker.id.to_string()))?;
        *slot = tracker.clone();
        self.save_trackers(&trackers).await
    }

    /// Remove a tracker.
    async fn delete_tracker(&mut self, id: &TrackerId) -> Result<()> {
        let mut trackers = self.load_trackers().await?;
        let before = trackers.len();
        trackers.retain(|t| &t.id != id);
        if trackers.len() == before {
            return Err(StorageError::NotFound(id.to_string()));
        }
        self.save_trackers(&trackers).await
    }
}
