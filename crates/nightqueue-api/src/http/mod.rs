//! HTTP interface module.
//!
//! - `routes`: path/verb table
//! - `handlers`: request adapters
//! - `params`: query/body parameter extraction
//! - `messages`: response wording

pub mod handlers;
pub mod messages;
pub mod params;
pub mod routes;
