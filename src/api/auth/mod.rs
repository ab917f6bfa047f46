//! Authentication API module

pub mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth", routes())
}

fn routes() -> Router<ServerState> {
    // Both routes are public; require_auth skips them
    Router::new()
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
}
