//! Order Repository
//!
//! Orders embed their line items, so a create persists order + lines in
//! one write and a delete removes both with no orphans left behind.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Order;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

// "order" is a SurrealQL keyword; the table carries a safe name instead.
const TABLE: &str = "customer_order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all orders, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM customer_order ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let order: Option<Order> = self.base.db().select(thing).await?;
        Ok(order)
    }

    /// Persist a priced order together with its embedded lines
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create(TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Full-field overwrite of a mutable order
    ///
    /// Every field passed here is authoritative; the caller has already
    /// resolved defaults (order number fallback, updated_at). Line items
    /// are not touched by updates.
    #[allow(clippy::too_many_arguments)]
    pub async fn update_full(
        &self,
        id: &str,
        dining_table: RecordId,
        order_number: String,
        total_amount: Decimal,
        status: String,
        customer_note: Option<String>,
        updated_at: DateTime<Utc>,
    ) -> RepoResult<Order> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    dining_table = $dining_table,
                    order_number = $order_number,
                    total_amount = $total_amount,
                    status = $status,
                    customer_note = $customer_note,
                    updated_at = $updated_at
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("dining_table", dining_table))
            .bind(("order_number", order_number))
            .bind(("total_amount", total_amount))
            .bind(("status", status))
            .bind(("customer_note", customer_note))
            .bind(("updated_at", updated_at))
            .await?;

        result
            .take::<Option<Order>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Hard delete an order; embedded lines go with it
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(())
    }
}
