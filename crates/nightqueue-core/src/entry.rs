//! Queue entry type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One pending request: who asked, and what for.
///
/// Field order is the on-disk order (`user`, then `item`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub user: String,
    pub item: String,
}

impl QueueEntry {
    pub fn new(user: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            item: item.into(),
        }
    }
}

impl fmt::Display for QueueEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.item, self.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let entry = QueueEntry::new("alice", "song A");
        assert_eq!(entry.to_string(), "song A (alice)");
    }

    #[test]
    fn test_serialize_field_order() {
        let entry = QueueEntry::new("alice", "song A");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"user":"alice","item":"song A"}"#);
    }

    #[test]
    fn test_deserialize() {
        let entry: QueueEntry = serde_json::from_str(r#"{"item":"x","user":"bob"}"#).unwrap();
        assert_eq!(entry, QueueEntry::new("bob", "x"));
    }
}
