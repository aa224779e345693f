//! # Nightqueue API
//!
//! Plain-text HTTP endpoints that Nightbot's `$(urlfetch)` calls.
//!
//! Every route is a thin adapter over [`nightqueue_core::QueueManager`]:
//! pull `user`/`message`/`position` from the query string or a JSON body,
//! run the queue operation, and answer with a chat-ready sentence. Domain
//! failures (closed queue, bad position, empty item) are still `200 OK`.

pub mod error;
pub mod http;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use http::routes::create_router;
pub use server::{HttpConfig, QueueServer};
pub use state::AppState;
