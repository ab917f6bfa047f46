//! Menu API module
//!
//! The menu is collaborator-owned; this surface is read-only.

pub mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/menu", get(handler::list))
}
