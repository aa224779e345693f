//! Queue route handlers.
//!
//! Each handler extracts its parameters, runs one queue or gate operation and
//! renders the outcome as plain text.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::HeaderMap,
};
use tracing::debug;

use super::messages;
use super::params::{parse_json_body, RequestParams};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /
pub async fn welcome() -> &'static str {
    messages::WELCOME
}

/// GET /queue
pub async fn list_queue(State(state): State<Arc<AppState>>) -> String {
    let manager = state.manager().await;
    messages::queue_listing(manager.entries())
}

/// GET /next
pub async fn next_in_queue(State(state): State<Arc<AppState>>) -> String {
    let manager = state.manager().await;
    messages::next_in_queue(manager.peek())
}

/// GET /add-to-queue?user=..&message=..
pub async fn add_from_query(
    State(state): State<Arc<AppState>>,
    Query(query): Query<Vec<(String, String)>>,
) -> String {
    add(&state, RequestParams::from_query(query)).await
}

/// POST /add-to-queue with `{"user": .., "message": ..}`
pub async fn add_from_body(
    State(state): State<Arc<AppState>>,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<String, ApiError> {
    let params = parse_json_body(&headers, &body)?.or(RequestParams::from_query(query));
    Ok(add(&state, params).await)
}

async fn add(state: &AppState, params: RequestParams) -> String {
    let user = params.user();
    debug!("Add request from {}: {:?}", user, params.message());

    let outcome = state.manager().await.add(user, params.message()).await;
    messages::add_reply(user, &outcome)
}

/// GET|POST /clear-queue
pub async fn clear_queue(State(state): State<Arc<AppState>>) -> &'static str {
    state.manager().await.clear().await;
    messages::CLEARED
}

/// GET /remove-from-queue?position=..
pub async fn remove_from_query(
    State(state): State<Arc<AppState>>,
    Query(query): Query<Vec<(String, String)>>,
) -> String {
    let params = RequestParams::from_query(query);
    let outcome = state.manager().await.remove_at(params.position()).await;
    messages::remove_reply(&outcome)
}

/// POST /remove-from-queue with `{"user": .., "message": "!removequeue <n>"}`
pub async fn remove_from_body(
    State(state): State<Arc<AppState>>,
    Query(query): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<String, ApiError> {
    let params = parse_json_body(&headers, &body)?.or(RequestParams::from_query(query));
    let user = params.user();

    let outcome = state.manager().await.remove_command(params.message()).await;
    Ok(messages::remove_reply_to(user, &outcome))
}

/// GET /open-queue
pub async fn open_queue(State(state): State<Arc<AppState>>) -> &'static str {
    state.manager().await.open_gate();
    messages::OPENED
}

/// GET /close-queue
pub async fn close_queue(State(state): State<Arc<AppState>>) -> &'static str {
    state.manager().await.close_gate();
    messages::CLOSED
}
