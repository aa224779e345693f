//! Application state.

use tokio::sync::{Mutex, MutexGuard};

use nightqueue_core::QueueManager;

/// State shared across handlers.
///
/// The manager sits behind one async mutex, so each request (including its
/// file write) finishes before the next mutation starts.
pub struct AppState {
    manager: Mutex<QueueManager>,
}

impl AppState {
    pub fn new(manager: QueueManager) -> Self {
        Self {
            manager: Mutex::new(manager),
        }
    }

    /// Exclusive access to the queue manager.
    pub async fn manager(&self) -> MutexGuard<'_, QueueManager> {
        self.manager.lock().await
    }
}
