//! Database Models

// Serde helpers
pub mod serde_helpers;

// Auth
pub mod account;

// Collaborator stores (read-only for the order core)
pub mod dining_table;
pub mod menu_item;

// Orders
pub mod order;

// Re-exports
pub use account::{Account, AccountCreate, AccountId};
pub use dining_table::{DiningTable, DiningTableCreate};
pub use menu_item::{MenuItem, MenuItemCreate};
pub use order::{
    Order, OrderCreate, OrderItemInput, OrderLine, OrderLineView, OrderUpdate, OrderView,
    STATUS_AWAITING_CONFIRMATION,
};
