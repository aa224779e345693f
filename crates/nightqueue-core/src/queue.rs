//! FIFO request queue mirrored to a store.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::entry::QueueEntry;
use crate::store::QueueStore;

/// Ordered list of pending requests.
///
/// Positions are 1-based and shift after every removal; entries carry no
/// stable id. Every mutation writes the full list back to the store before
/// returning. A failed write is logged and the in-memory change stands.
pub struct RequestQueue {
    entries: Vec<QueueEntry>,
    store: Arc<dyn QueueStore>,
}

impl RequestQueue {
    /// Restore the queue from `store`. A missing or unreadable snapshot yields an empty queue.
    pub async fn load(store: Arc<dyn QueueStore>) -> Self {
        let entries = match store.load().await {
            Ok(Some(entries)) => {
                info!("Restored {} queue entries", entries.len());
                entries
            }
            Ok(None) => {
                debug!("No saved queue found, starting empty");
                Vec::new()
            }
            Err(e) => {
                error!("Error loading queue, starting empty: {}", e);
                Vec::new()
            }
        };

        Self { entries, store }
    }

    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry that is up next.
    pub fn front(&self) -> Option<&QueueEntry> {
        self.entries.first()
    }

    /// Append an entry and return the new length.
    pub async fn push(&mut self, entry: QueueEntry) -> usize {
        self.entries.push(entry);
        self.persist().await;
        self.entries.len()
    }

    /// Remove the entry at 1-based `position`. Out-of-range positions change nothing.
    pub async fn remove_at(&mut self, position: usize) -> Option<QueueEntry> {
        if position == 0 || position > self.entries.len() {
            return None;
        }

        let removed = self.entries.remove(position - 1);
        self.persist().await;
        Some(removed)
    }

    /// Drop every entry and return how many there were.
    pub async fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.persist().await;
        count
    }

    async fn persist(&self) {
        if let Err(e) = self.store.save(&self.entries).await {
            error!("Error saving queue: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FileQueueStore, MemoryQueueStore};
    use tempfile::TempDir;

    async fn queue_with(entries: Vec<QueueEntry>) -> (RequestQueue, Arc<MemoryQueueStore>) {
        let store = Arc::new(MemoryQueueStore::with_entries(entries));
        let queue = RequestQueue::load(store.clone()).await;
        (queue, store)
    }

    fn abc() -> Vec<QueueEntry> {
        vec![
            QueueEntry::new("u1", "a"),
            QueueEntry::new("u2", "b"),
            QueueEntry::new("u3", "c"),
        ]
    }

    #[tokio::test]
    async fn test_load_empty_store() {
        let store = Arc::new(MemoryQueueStore::new());
        let queue = RequestQueue::load(store).await;
        assert!(queue.is_empty());
        assert!(queue.front().is_none());
    }

    #[tokio::test]
    async fn test_load_restores_entries() {
        let (queue, _) = queue_with(abc()).await;
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.front().unwrap().item, "a");
    }

    #[tokio::test]
    async fn test_load_corrupt_file_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("queue.json");
        std::fs::write(&path, "[{\"user\": 1}").unwrap();

        let store = Arc::new(FileQueueStore::new(&path).await.unwrap());
        let queue = RequestQueue::load(store).await;
        assert!(queue.is_empty());
    }

    #[tokio::test]
    async fn test_push_persists() {
        let (mut queue, store) = queue_with(Vec::new()).await;

        let len = queue.push(QueueEntry::new("alice", "song A")).await;
        assert_eq!(len, 1);
        assert_eq!(store.snapshot().await.unwrap(), queue.entries());
    }

    #[tokio::test]
    async fn test_remove_at_shifts_positions() {
        let (mut queue, store) = queue_with(abc()).await;

        let removed = queue.remove_at(2).await.unwrap();
        assert_eq!(removed.item, "b");

        let items: Vec<_> = queue.entries().iter().map(|e| e.item.as_str()).collect();
        assert_eq!(items, vec!["a", "c"]);
        assert_eq!(store.snapshot().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_remove_at_out_of_range() {
        let (mut queue, store) = queue_with(abc()).await;

        assert!(queue.remove_at(0).await.is_none());
        assert!(queue.remove_at(4).await.is_none());
        assert_eq!(queue.len(), 3);
        assert_eq!(store.save_count(), 0);
    }

    #[tokio::test]
    async fn test_remove_last_position() {
        let (mut queue, _) = queue_with(abc()).await;
        assert_eq!(queue.remove_at(3).await.unwrap().item, "c");
        assert_eq!(queue.len(), 2);
    }

    #[tokio::test]
    async fn test_clear() {
        let (mut queue, store) = queue_with(abc()).await;

        assert_eq!(queue.clear().await, 3);
        assert!(queue.is_empty());
        assert_eq!(store.snapshot().await, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_clear_empty_still_persists() {
        let (mut queue, store) = queue_with(Vec::new()).await;
        assert_eq!(queue.clear().await, 0);
        assert_eq!(store.save_count(), 1);
    }

    #[tokio::test]
    async fn test_persist_failure_keeps_change() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(FileQueueStore::new(temp_dir.path()).await.unwrap());
        let mut queue = RequestQueue::load(store).await;

        let len = queue.push(QueueEntry::new("alice", "song A")).await;
        assert_eq!(len, 1);
        assert_eq!(queue.len(), 1);
    }
}
