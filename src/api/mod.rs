//! API route modules
//!
//! # Structure
//!
//! - [`auth`] - registration and login
//! - [`orders`] - order lifecycle (create, read, update, delete)
//! - [`tables`] - dining table lookup (read-only)
//! - [`menu`] - menu lookup (read-only)
//! - [`health`] - health check

pub mod auth;
pub mod health;
pub mod menu;
pub mod orders;
pub mod tables;

use axum::Router;

use crate::core::ServerState;

/// Build the axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(auth::router())
        .merge(health::router())
        .merge(orders::router())
        .merge(tables::router())
        .merge(menu::router())
}
