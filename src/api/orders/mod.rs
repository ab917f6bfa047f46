//! Order API module
//!
//! Creation and reads are public (self-service ordering); mutations are
//! role-gated: update requires Admin or Manager, delete requires Admin.

pub mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, put},
};

use crate::auth::require_role;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    let public_routes = Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id));

    let manage_routes = Router::new()
        .route("/{id}", put(handler::update))
        .layer(middleware::from_fn(require_role(&["Admin", "Manager"])));

    let admin_routes = Router::new()
        .route("/{id}", delete(handler::delete))
        .layer(middleware::from_fn(require_role(&["Admin"])));

    public_routes.merge(manage_routes).merge(admin_routes)
}
