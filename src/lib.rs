//! Order Server - restaurant order-taking backend
//!
//! Clients authenticate, then create, read, update, and delete orders
//! composed of line items referencing a menu and a table. Line-item
//! prices are always recomputed from the stored menu; order totals are
//! derived at creation. Mutations are gated by the role claim carried in
//! a signed token.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/      # Config, state, server
//! ├── auth/      # JWT tokens, role gates
//! ├── api/       # HTTP routes and handlers
//! ├── db/        # Embedded SurrealDB models + repositories
//! ├── pricing/   # Order pricing engine
//! └── utils/     # Errors, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod pricing;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState, build_router};
pub use pricing::PricingEngine;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env and initialize logging
pub fn setup_environment() {
    dotenv::dotenv().ok();
    let log_level = std::env::var("LOG_LEVEL").ok();
    init_logger_with_file(log_level.as_deref(), None);
}
