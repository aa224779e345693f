//! Queue manager: the one owner of queue and gate.

use tracing::info;

use crate::command::{parse_item, parse_position, strip_command, REMOVE_PREFIX};
use crate::entry::QueueEntry;
use crate::gate::{Gate, GateState};
use crate::queue::RequestQueue;

/// Result of an add request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Appended; `length` is the queue length afterwards.
    Added { entry: QueueEntry, length: usize },
    /// The gate is closed.
    Closed,
    /// Nothing left after stripping the command prefix.
    EmptyItem,
}

/// Result of a remove request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed { position: usize, entry: QueueEntry },
    /// Non-numeric, below 1, or past the end of the queue.
    InvalidPosition,
}

/// Queue and gate behind a single owner, handed to the HTTP layer.
pub struct QueueManager {
    queue: RequestQueue,
    gate: Gate,
}

impl QueueManager {
    pub fn new(queue: RequestQueue, gate: Gate) -> Self {
        Self { queue, gate }
    }

    pub fn entries(&self) -> &[QueueEntry] {
        self.queue.entries()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// The entry that is up next.
    pub fn peek(&self) -> Option<&QueueEntry> {
        self.queue.front()
    }

    pub fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    /// Handle `!queue <item>` from `user`.
    pub async fn add(&mut self, user: &str, raw_message: &str) -> AddOutcome {
        if !self.gate.is_open() {
            return AddOutcome::Closed;
        }

        let item = parse_item(raw_message);
        if item.is_empty() {
            return AddOutcome::EmptyItem;
        }

        let entry = QueueEntry::new(user, item);
        let length = self.queue.push(entry.clone()).await;
        info!("{} queued '{}' (length {})", entry.user, entry.item, length);
        AddOutcome::Added { entry, length }
    }

    /// Remove the entry at the 1-based position written in `raw_position`.
    pub async fn remove_at(&mut self, raw_position: &str) -> RemoveOutcome {
        let Some(position) = parse_position(raw_position)
            .and_then(|p| usize::try_from(p).ok())
            .filter(|p| *p >= 1)
        else {
            return RemoveOutcome::InvalidPosition;
        };

        match self.queue.remove_at(position).await {
            Some(entry) => {
                info!("Removed #{} '{}' ({})", position, entry.item, entry.user);
                RemoveOutcome::Removed { position, entry }
            }
            None => RemoveOutcome::InvalidPosition,
        }
    }

    /// Handle `!removequeue <n>`.
    pub async fn remove_command(&mut self, raw_message: &str) -> RemoveOutcome {
        let position = strip_command(raw_message, REMOVE_PREFIX);
        self.remove_at(position).await
    }

    /// Empty the queue regardless of the gate. Returns how many entries were dropped.
    pub async fn clear(&mut self) -> usize {
        let count = self.queue.clear().await;
        info!("Queue cleared ({} entries dropped)", count);
        count
    }

    /// Open the gate; see [`Gate::open`].
    pub fn open_gate(&mut self) -> bool {
        self.gate.open()
    }

    /// Close the gate; see [`Gate::close`].
    pub fn close_gate(&mut self) -> bool {
        self.gate.close()
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
