//! Order API Handlers

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{Order, OrderCreate, OrderLineView, OrderUpdate, OrderView};
use crate::db::repository::{DiningTableRepository, MenuItemRepository, OrderRepository};
use crate::pricing::PricingEngine;
use crate::utils::{AppError, AppResult};

/// Create order response
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderCreated {
    pub id: String,
    pub message: String,
}

/// Plain confirmation body
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/orders - all orders, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<OrderView>>> {
    let repo = OrderRepository::new(state.get_db());
    let orders = repo.find_all().await?;
    let views = build_views(&state, orders).await?;
    Ok(Json(views))
}

/// GET /api/orders/:id - single order
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderView>> {
    let repo = OrderRepository::new(state.get_db());
    let order = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;

    let mut views = build_views(&state, vec![order]).await?;
    let view = views
        .pop()
        .ok_or_else(|| AppError::internal("Order view assembly produced no result"))?;
    Ok(Json(view))
}

/// POST /api/orders - create and price a new order
///
/// Open to anonymous callers (self-service ordering). Pricing and
/// persistence are all-or-nothing: any bad line aborts before anything
/// is written.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<OrderCreated>)> {
    let engine = PricingEngine::new(state.get_db());
    let priced = engine.price_order(&payload.table_id, &payload.items).await?;

    let repo = OrderRepository::new(state.get_db());
    let order = repo.create(priced.into_order(payload.note)).await?;

    let id = order
        .id
        .as_ref()
        .map(|t| t.to_string())
        .unwrap_or_default();
    tracing::info!(
        order_id = %id,
        order_number = %order.order_number,
        total = %order.total_amount,
        "Order created"
    );

    Ok((
        StatusCode::CREATED,
        Json(OrderCreated {
            id,
            message: "Order placed successfully".to_string(),
        }),
    ))
}

/// PUT /api/orders/:id - full-field overwrite (Admin or Manager)
///
/// Every listed field is authoritative on each call; there are no
/// partial-patch semantics. The total may be manually overridden and is
/// not re-validated against the line items.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderUpdate>,
) -> AppResult<Json<MessageResponse>> {
    let repo = OrderRepository::new(state.get_db());
    let existing = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;

    // Table reassignment: re-check existence only when the table changes
    let dining_table = if payload.table_id != existing.dining_table.to_string() {
        let tables = DiningTableRepository::new(state.get_db());
        let table = tables
            .find_by_id(&payload.table_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Table {} not found", payload.table_id)))?;
        table
            .id
            .ok_or_else(|| AppError::internal("Stored table has no id"))?
    } else {
        existing.dining_table.clone()
    };

    let order_number = match payload.order_number {
        Some(n) if !n.is_empty() => n,
        _ => existing.order_number.clone(),
    };
    let updated_at = payload.updated_at.unwrap_or_else(Utc::now);

    repo.update_full(
        &id,
        dining_table,
        order_number,
        payload.total_amount,
        payload.status,
        payload.customer_note,
        updated_at,
    )
    .await?;

    tracing::info!(order_id = %id, "Order updated");

    Ok(Json(MessageResponse {
        message: "Order updated successfully".to_string(),
    }))
}

/// DELETE /api/orders/:id - hard delete (Admin only)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = OrderRepository::new(state.get_db());
    repo.delete(&id).await?;

    tracing::info!(order_id = %id, "Order deleted");

    Ok(Json(MessageResponse {
        message: "Order deleted".to_string(),
    }))
}

/// Resolve table labels and menu names for a batch of orders
///
/// Labels and names are joined from the collaborator stores at read time;
/// entries removed from those stores since creation resolve to an empty
/// string rather than failing the whole read.
async fn build_views(state: &ServerState, orders: Vec<Order>) -> AppResult<Vec<OrderView>> {
    let tables = DiningTableRepository::new(state.get_db());
    let menu = MenuItemRepository::new(state.get_db());

    let mut table_labels: HashMap<String, String> = HashMap::new();
    let mut menu_names: HashMap<String, String> = HashMap::new();
    let mut views = Vec::with_capacity(orders.len());

    for order in orders {
        let table_id = order.dining_table.to_string();
        if !table_labels.contains_key(&table_id) {
            let label = tables
                .find_by_id(&table_id)
                .await?
                .map(|t| t.label)
                .unwrap_or_default();
            table_labels.insert(table_id.clone(), label);
        }

        let mut items = Vec::with_capacity(order.items.len());
        for line in &order.items {
            let menu_item_id = line.menu_item.to_string();
            if !menu_names.contains_key(&menu_item_id) {
                let name = menu
                    .find_by_id(&menu_item_id)
                    .await?
                    .map(|m| m.name)
                    .unwrap_or_default();
                menu_names.insert(menu_item_id.clone(), name);
            }
            items.push(OrderLineView {
                name: menu_names[&menu_item_id].clone(),
                menu_item_id,
                quantity: line.quantity,
                unit_price: line.unit_price,
                line_total: line.line_total,
            });
        }

        views.push(OrderView {
            id: order.id.as_ref().map(|t| t.to_string()).unwrap_or_default(),
            order_number: order.order_number,
            table_label: table_labels[&table_id].clone(),
            table_id,
            total_amount: order.total_amount,
            status: order.status,
            customer_note: order.customer_note,
            created_at: order.created_at,
            updated_at: order.updated_at,
            items,
        });
    }

    Ok(views)
}
