//! Order pricing engine
//!
//! Turns a table reference plus (menu item, quantity) pairs into an
//! authoritatively priced order. Unit prices always come from the stored
//! menu - the input type carries no client price, so a forged price cannot
//! even be expressed. Pure computation apart from store reads; persistence
//! is the lifecycle layer's job.

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use crate::db::models::{Order, OrderItemInput, OrderLine, STATUS_AWAITING_CONFIRMATION};
use crate::db::repository::{DiningTableRepository, MenuItemRepository};
use crate::utils::{AppError, AppResult};

/// A validated, fully priced order that has not been persisted yet
#[derive(Debug, Clone)]
pub struct PricedOrder {
    pub order_number: String,
    pub dining_table: RecordId,
    pub total_amount: Decimal,
    pub lines: Vec<OrderLine>,
}

impl PricedOrder {
    /// Build the persistable order entity
    pub fn into_order(self, customer_note: Option<String>) -> Order {
        Order {
            id: None,
            order_number: self.order_number,
            dining_table: self.dining_table,
            total_amount: self.total_amount,
            status: STATUS_AWAITING_CONFIRMATION.to_string(),
            customer_note,
            created_at: chrono::Utc::now(),
            updated_at: None,
            items: self.lines,
        }
    }
}

/// Pricing engine over the collaborator lookup stores
#[derive(Clone)]
pub struct PricingEngine {
    tables: DiningTableRepository,
    menu: MenuItemRepository,
}

impl PricingEngine {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            tables: DiningTableRepository::new(db.clone()),
            menu: MenuItemRepository::new(db),
        }
    }

    /// Validate and price an order
    ///
    /// Fails on the first unresolved menu item (fail-fast, not
    /// batch-validate-all). Quantities must be positive and the item list
    /// non-empty.
    pub async fn price_order(
        &self,
        table_id: &str,
        items: &[OrderItemInput],
    ) -> AppResult<PricedOrder> {
        if items.is_empty() {
            return Err(AppError::validation(
                "Order must contain at least one item",
            ));
        }

        let table = self
            .tables
            .find_by_id(table_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Table {} not found", table_id)))?;
        let dining_table = table
            .id
            .ok_or_else(|| AppError::internal("Stored table has no id"))?;

        let mut lines = Vec::with_capacity(items.len());
        let mut total_amount = Decimal::ZERO;

        for item in items {
            if item.quantity <= 0 {
                return Err(AppError::validation(format!(
                    "Quantity for menu item {} must be positive",
                    item.menu_item_id
                )));
            }

            let menu_item = self
                .menu
                .find_by_id(&item.menu_item_id)
                .await?
                .ok_or_else(|| {
                    AppError::not_found(format!("Menu item {} not found", item.menu_item_id))
                })?;
            let menu_item_id = menu_item
                .id
                .ok_or_else(|| AppError::internal("Stored menu item has no id"))?;

            // Price comes from the store, never from the request
            let unit_price = menu_item.price;
            let line_total = unit_price * Decimal::from(item.quantity);
            total_amount += line_total;

            lines.push(OrderLine {
                menu_item: menu_item_id,
                quantity: item.quantity,
                unit_price,
                line_total,
            });
        }

        Ok(PricedOrder {
            order_number: generate_order_number(Local::now()),
            dining_table,
            total_amount,
            lines,
        })
    }
}

/// Human-readable order number from wall-clock time, e.g. "ORD-123045"
///
/// Two orders created within the same second collide; accepted for this
/// domain's throughput and documented as a known limitation.
fn generate_order_number<Tz: chrono::TimeZone>(now: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("ORD-{}", now.format("%H%M%S"))
}
