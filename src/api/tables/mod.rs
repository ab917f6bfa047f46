//! Dining Table API module
//!
//! Tables are collaborator-owned; this surface is read-only.

pub mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/tables", get(handler::list))
}
