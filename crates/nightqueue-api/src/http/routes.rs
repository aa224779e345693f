//! HTTP route definitions.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Create the router.
///
/// ## Route Structure
///
/// ```text
/// GET        /                  - Welcome/help text
/// GET        /queue             - Current queue
/// GET        /next              - Next entry
/// GET, POST  /add-to-queue      - Add an entry (query or JSON body)
/// GET, POST  /clear-queue       - Empty the queue
/// GET, POST  /remove-from-queue - Remove by position (query) or `!removequeue <n>` (body)
/// GET        /open-queue        - Accept new entries, start self-pinging
/// GET        /close-queue       - Refuse new entries, stop self-pinging
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/queue", get(handlers::list_queue))
        .route("/next", get(handlers::next_in_queue))
        .route(
            "/add-to-queue",
            get(handlers::add_from_query).post(handlers::add_from_body),
        )
        .route(
            "/clear-queue",
            get(handlers::clear_queue).post(handlers::clear_queue),
        )
        .route(
            "/remove-from-queue",
            get(handlers::remove_from_query).post(handlers::remove_from_body),
        )
        .route("/open-queue", get(handlers::open_queue))
        .route("/close-queue", get(handlers::close_queue))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
