//! Chat-ready response wording.

use nightqueue_core::{AddOutcome, QueueEntry, RemoveOutcome};

pub const WELCOME: &str = "Welcome to the Nightbot Queue Manager! Use /queue, /add-to-queue, /clear-queue, /open-queue, /close-queue, or /next.";
pub const EMPTY_QUEUE: &str = "The queue is currently empty.";
pub const CLEARED: &str = "The queue has been cleared!";
pub const OPENED: &str = "The queue is now open!";
pub const CLOSED: &str = "The queue is now closed!";

/// `Current Queue: 1. <item> (<user>) | 2. ...`
pub fn queue_listing(entries: &[QueueEntry]) -> String {
    if entries.is_empty() {
        return EMPTY_QUEUE.to_string();
    }

    let formatted = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| format!("{}. {}", index + 1, entry))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("Current Queue: {}", formatted)
}

pub fn next_in_queue(entry: Option<&QueueEntry>) -> String {
    match entry {
        Some(entry) => format!("Next in queue: {}", entry),
        None => EMPTY_QUEUE.to_string(),
    }
}

pub fn add_reply(user: &str, outcome: &AddOutcome) -> String {
    match outcome {
        AddOutcome::Added { length, .. } => format!(
            "@{}, your item has been added to the queue! Current queue length: {} items.",
            user, length
        ),
        AddOutcome::Closed => format!(
            "@{}, the queue is currently closed. You cannot add items right now.",
            user
        ),
        AddOutcome::EmptyItem => format!(
            "@{}, please provide an item to add to the queue. Usage: !queue <item>",
            user
        ),
    }
}

/// Reply to a chat `!removequeue`, addressed to the moderator.
pub fn remove_reply_to(user: &str, outcome: &RemoveOutcome) -> String {
    match outcome {
        RemoveOutcome::Removed { position, .. } => {
            format!("@{}, item #{} has been removed from the queue!", user, position)
        }
        RemoveOutcome::InvalidPosition => format!(
            "@{}, invalid position. Please provide a valid queue number to remove.",
            user
        ),
    }
}

/// Reply to a position passed in the query string.
pub fn remove_reply(outcome: &RemoveOutcome) -> String {
    match outcome {
        RemoveOutcome::Removed { position, .. } => {
            format!("Item #{} has been removed from the queue!", position)
        }
        RemoveOutcome::InvalidPosition => {
            "Invalid position. Please provide a valid queue number to remove.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_empty() {
        assert_eq!(queue_listing(&[]), "The queue is currently empty.");
    }

    #[test]
    fn test_listing_format() {
        let entries = vec![
            QueueEntry::new("alice", "song A"),
            QueueEntry::new("bob", "song B"),
        ];
        assert_eq!(
            queue_listing(&entries),
            "Current Queue: 1. song A (alice) | 2. song B (bob)"
        );
    }

    #[test]
    fn test_next_in_queue() {
        let entry = QueueEntry::new("alice", "song A");
        assert_eq!(next_in_queue(Some(&entry)), "Next in queue: song A (alice)");
        assert_eq!(next_in_queue(None), "The queue is currently empty.");
    }

    #[test]
    fn test_add_replies() {
        let added = AddOutcome::Added {
            entry: QueueEntry::new("alice", "song A"),
            length: 1,
        };
        assert_eq!(
            add_reply("alice", &added),
            "@alice, your item has been added to the queue! Current queue length: 1 items."
        );
        assert!(add_reply("bob", &AddOutcome::Closed).contains("currently closed"));
        assert!(add_reply("bob", &AddOutcome::EmptyItem).ends_with("Usage: !queue <item>"));
    }

    #[test]
    fn test_remove_replies() {
        let removed = RemoveOutcome::Removed {
            position: 3,
            entry: QueueEntry::new("alice", "song A"),
        };
        assert_eq!(
            remove_reply_to("mod", &removed),
            "@mod, item #3 has been removed from the queue!"
        );
        assert_eq!(remove_reply(&removed), "Item #3 has been removed from the queue!");
        assert!(remove_reply_to("mod", &RemoveOutcome::InvalidPosition).starts_with("@mod, invalid"));
        assert!(remove_reply(&RemoveOutcome::InvalidPosition).starts_with("Invalid position."));
    }
}
