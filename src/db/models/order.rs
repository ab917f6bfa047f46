//! Order Model
//!
//! An order owns its line items: lines are embedded in the order record,
//! so order + lines persist in a single create and vanish together on
//! delete. Each line snapshots the menu price at creation time; later menu
//! price changes do not touch existing orders.

use super::serde_helpers;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Status assigned to every newly created order
pub const STATUS_AWAITING_CONFIRMATION: &str = "AwaitingConfirmation";

// =============================================================================
// Entities
// =============================================================================

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Human-readable sequence token, e.g. "ORD-123045"
    pub order_number: String,
    #[serde(with = "serde_helpers::record_id")]
    pub dining_table: RecordId,
    /// Derived from line totals at creation; mutable via explicit override
    pub total_amount: Decimal,
    /// Free-form state string; transitions are unconstrained for trusted callers
    pub status: String,
    pub customer_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub items: Vec<OrderLine>,
}

/// One menu item + quantity within an order, with a price snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(with = "serde_helpers::record_id")]
    pub menu_item: RecordId,
    pub quantity: i32,
    /// Snapshot of MenuItem.price at creation time
    pub unit_price: Decimal,
    /// unit_price * quantity
    pub line_total: Decimal,
}

// =============================================================================
// API request types
// =============================================================================

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub table_id: String,
    pub note: Option<String>,
    pub items: Vec<OrderItemInput>,
}

/// One requested line: menu item reference and quantity only.
/// Prices are deliberately absent - they are resolved server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub menu_item_id: String,
    pub quantity: i32,
}

/// Update order payload - full-field overwrite, no partial-patch semantics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub table_id: String,
    /// Kept unchanged when absent or empty
    pub order_number: Option<String>,
    /// Manual override allowed; not re-validated against line totals
    pub total_amount: Decimal,
    pub status: String,
    pub customer_note: Option<String>,
    /// Defaults to current time when not supplied
    pub updated_at: Option<DateTime<Utc>>,
}

// =============================================================================
// API response types
// =============================================================================

/// Order view with table label and menu names resolved at read time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderView {
    pub id: String,
    pub order_number: String,
    pub table_id: String,
    pub table_label: String,
    pub total_amount: Decimal,
    pub status: String,
    pub customer_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub items: Vec<OrderLineView>,
}

/// Line view with the menu name joined from the menu store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineView {
    pub menu_item_id: String,
    pub name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}
