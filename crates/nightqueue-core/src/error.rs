//! Queue errors.

use thiserror::Error;

/// Errors raised below the domain layer.
///
/// Closed gates, empty items and bad positions are not errors; they are
/// reported through [`crate::AddOutcome`] and [`crate::RemoveOutcome`].
#[derive(Debug, Error)]
pub enum QueueError {
    /// Reading or writing the queue file failed.
    #[error("Queue file IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The queue file did not contain a valid entry list.
    #[error("Queue serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The keepalive HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
