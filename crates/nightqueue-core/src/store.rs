//! Queue persistence store.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::entry::QueueEntry;
use crate::error::QueueError;

/// Backing storage for the queue. Each save replaces the whole snapshot.
#[async_trait]
pub trait QueueStore: Send + Sync {
    /// Load the last saved snapshot, `None` if nothing was ever saved.
    async fn load(&self) -> Result<Option<Vec<QueueEntry>>, QueueError>;

    /// Overwrite the snapshot with `entries`.
    async fn save(&self, entries: &[QueueEntry]) -> Result<(), QueueError>;
}

/// In-memory queue store for testing.
pub struct MemoryQueueStore {
    entries: tokio::sync::RwLock<Option<Vec<QueueEntry>>>,
    saves: AtomicUsize,
}

impl MemoryQueueStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: tokio::sync::RwLock::new(None),
            saves: AtomicUsize::new(0),
        }
    }

    /// Create a store that already holds a snapshot.
    pub fn with_entries(entries: Vec<QueueEntry>) -> Self {
        Self {
            entries: tokio::sync::RwLock::new(Some(entries)),
            saves: AtomicUsize::new(0),
        }
    }

    /// Current snapshot.
    pub async fn snapshot(&self) -> Option<Vec<QueueEntry>> {
        self.entries.read().await.clone()
    }

    /// Number of saves performed.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }
}

impl Default for MemoryQueueStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueueStore for MemoryQueueStore {
    async fn load(&self) -> Result<Option<Vec<QueueEntry>>, QueueError> {
        Ok(self.entries.read().await.clone())
    }

    async fn save(&self, entries: &[QueueEntry]) -> Result<(), QueueError> {
        *self.entries.write().await = Some(entries.to_vec());
        self.saves.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

/// Single JSON file holding the queue as a pretty-printed array.
///
/// ```text
/// [
///   {
///     "user": "alice",
///     "item": "song A"
///   }
/// ]
/// ```
pub struct FileQueueStore {
    path: PathBuf,
}

impl FileQueueStore {
    /// Create a file-backed store, creating the parent directory if needed.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self, QueueError> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        debug!("FileQueueStore initialized at {:?}", path);
        Ok(Self { path })
    }

    /// Path of the queue file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QueueStore for FileQueueStore {
    async fn load(&self) -> Result<Option<Vec<QueueEntry>>, QueueError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).await?;
        let entries: Vec<QueueEntry> = serde_json::from_str(&content)?;

        debug!("Loaded {} queue entries from {:?}", entries.len(), self.path);
        Ok(Some(entries))
    }

    async fn save(&self, entries: &[QueueEntry]) -> Result<(), QueueError> {
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, content).await?;

        debug!("Saved {} queue entries to {:?}", entries.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
