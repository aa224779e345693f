//! # Nightqueue Core
//!
//! The request queue behind the Nightbot queue commands.
//!
//! - **Queue**: FIFO list of `{user, item}` entries, mirrored to a JSON file on every mutation
//! - **Gate**: open/closed flag that decides whether new entries are accepted
//! - **Keepalive**: periodic self-ping while the gate is open, so the host does not idle the service
//! - **Manager**: the single owner of queue and gate that the HTTP layer talks to

pub mod command;
pub mod entry;
pub mod error;
pub mod gate;
pub mod keepalive;
pub mod manager;
pub mod queue;
pub mod store;

pub use entry::QueueEntry;
pub use error::QueueError;
pub use gate::{Gate, GateState};
pub use keepalive::{KeepalivePinger, PingerSettings};
pub use manager::{AddOutcome, QueueManager, RemoveOutcome};
pub use queue::RequestQueue;
pub use store::{FileQueueStore, MemoryQueueStore, QueueStore};
