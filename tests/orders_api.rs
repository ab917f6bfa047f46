//! Order lifecycle tests - pricing, reads, role-gated mutations

mod common;

use http::StatusCode;
use rust_decimal::Decimal;
use serde_json::json;

use common::{dec, login, register_and_login, request, seed_catalog, test_app};

#[tokio::test]
async fn create_order_prices_lines_from_the_menu() {
    let (app, state) = test_app().await;
    let (table_id, pho_id, tea_id) = seed_catalog(&state).await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/orders",
        None,
        Some(json!({
            "table_id": table_id,
            "note": "less spicy",
            "items": [
                { "menu_item_id": pho_id, "quantity": 2 },
                { "menu_item_id": tea_id, "quantity": 1 },
            ],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
    let order_id = body["id"].as_str().unwrap().to_string();

    let (status, view) = request(&app, "GET", &format!("/api/orders/{}", order_id), None, None).await;
    assert_eq!(status, StatusCode::OK);

    // 2 x 50000 + 1 x 30000
    assert_eq!(dec(&view["total_amount"]), Decimal::from(130_000));
    assert_eq!(view["status"], "AwaitingConfirmation");
    assert_eq!(view["customer_note"], "less spicy");
    assert_eq!(view["table_label"], "Table 3");
    assert!(view["order_number"].as_str().unwrap().starts_with("ORD-"));
    assert!(view["updated_at"].is_null());

    let items = view["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    let pho_line = items
        .iter()
        .find(|l| l["name"] == "Pho bo")
        .expect("pho line missing");
    assert_eq!(pho_line["quantity"], 2);
    assert_eq!(dec(&pho_line["unit_price"]), Decimal::from(50_000));
    assert_eq!(dec(&pho_line["line_total"]), Decimal::from(100_000));
}

#[tokio::test]
async fn client_supplied_prices_are_ignored() {
    let (app, state) = test_app().await;
    let (table_id, pho_id, _) = seed_catalog(&state).await;

    // Extra price fields in the payload must not affect the total
    let (status, body) = request(
        &app,
        "POST",
        "/api/orders",
        None,
        Some(json!({
            "table_id": table_id,
            "items": [
                { "menu_item_id": pho_id, "quantity": 1, "unit_price": "1", "line_total": "1" },
            ],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let order_id = body["id"].as_str().unwrap();
    let (_, view) = request(&app, "GET", &format!("/api/orders/{}", order_id), None, None).await;
    assert_eq!(dec(&view["total_amount"]), Decimal::from(50_000));
}

#[tokio::test]
async fn create_rejects_bad_payloads() {
    let (app, state) = test_app().await;
    let (table_id, pho_id, _) = seed_catalog(&state).await;

    // No items
    let (status, _) = request(
        &app,
        "POST",
        "/api/orders",
        None,
        Some(json!({ "table_id": table_id, "items": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Non-positive quantity
    let (status, _) = request(
        &app,
        "POST",
        "/api/orders",
        None,
        Some(json!({
            "table_id": table_id,
            "items": [{ "menu_item_id": pho_id, "quantity": 0 }],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown table
    let (status, _) = request(
        &app,
        "POST",
        "/api/orders",
        None,
        Some(json!({
            "table_id": "dining_table:missing",
            "items": [{ "menu_item_id": pho_id, "quantity": 1 }],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Unknown menu item
    let (status, _) = request(
        &app,
        "POST",
        "/api/orders",
        None,
        Some(json!({
            "table_id": table_id,
            "items": [{ "menu_item_id": "menu_item:missing", "quantity": 1 }],
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_returns_newest_first() {
    let (app, state) = test_app().await;
    let (table_id, pho_id, _) = seed_catalog(&state).await;

    let mut ids = Vec::new();
    for quantity in [1, 2] {
        let (status, body) = request(
            &app,
            "POST",
            "/api/orders",
            None,
            Some(json!({
                "table_id": table_id,
                "items": [{ "menu_item_id": pho_id, "quantity": quantity }],
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(body["id"].as_str().unwrap().to_string());
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }

    let (status, body) = request(&app, "GET", "/api/orders", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let listed: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect();
    assert_eq!(listed, vec![ids[1].as_str(), ids[0].as_str()]);
}

#[tokio::test]
async fn get_unknown_order_is_not_found() {
    let (app, _state) = test_app().await;

    let (status, _) = request(&app, "GET", "/api/orders/customer_order:missing", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_overwrites_every_field() {
    let (app, state) = test_app().await;
    let (table_id, pho_id, _) = seed_catalog(&state).await;

    let (_, created) = request(
        &app,
        "POST",
        "/api/orders",
        None,
        Some(json!({
            "table_id": table_id,
            "items": [{ "menu_item_id": pho_id, "quantity": 1 }],
        })),
    )
    .await;
    let order_id = created["id"].as_str().unwrap().to_string();

    let (_, before) = request(&app, "GET", &format!("/api/orders/{}", order_id), None, None).await;
    let original_number = before["order_number"].as_str().unwrap().to_string();

    let manager = register_and_login(&app, "floor-mgr", Some("Manager")).await;
    let (status, body) = request(
        &app,
        "PUT",
        &format!("/api/orders/{}", order_id),
        Some(&manager),
        Some(json!({
            "table_id": table_id,
            "total_amount": "999000",
            "status": "Confirmed",
            "customer_note": "rush it",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "update failed: {}", body);

    let (_, view) = request(&app, "GET", &format!("/api/orders/{}", order_id), None, None).await;
    // Manual total override sticks; no recomputation from the lines
    assert_eq!(dec(&view["total_amount"]), Decimal::from(999_000));
    assert_eq!(view["status"], "Confirmed");
    assert_eq!(view["customer_note"], "rush it");
    // Omitted order_number keeps the original
    assert_eq!(view["order_number"], original_number.as_str());
    assert!(!view["updated_at"].is_null());
    // Line items survive a full-field update untouched
    assert_eq!(view["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn update_is_gated_to_admin_and_manager() {
    let (app, state) = test_app().await;
    let (table_id, pho_id, _) = seed_catalog(&state).await;

    let (_, created) = request(
        &app,
        "POST",
        "/api/orders",
        None,
        Some(json!({
            "table_id": table_id,
            "items": [{ "menu_item_id": pho_id, "quantity": 1 }],
        })),
    )
    .await;
    let order_id = created["id"].as_str().unwrap().to_string();

    let payload = json!({
        "table_id": table_id,
        "total_amount": "50000",
        "status": "Confirmed",
    });

    let user = register_and_login(&app, "plain-user", None).await;
    let (status, _) = request(
        &app,
        "PUT",
        &format!("/api/orders/{}", order_id),
        Some(&user),
        Some(payload.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let admin = login(&app, "admin", common::ADMIN_PASSWORD).await;
    let (status, _) = request(
        &app,
        "PUT",
        &format!("/api/orders/{}", order_id),
        Some(&admin),
        Some(payload),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn update_checks_order_and_table_existence() {
    let (app, state) = test_app().await;
    let (table_id, pho_id, _) = seed_catalog(&state).await;
    let manager = register_and_login(&app, "mgr2", Some("Manager")).await;

    let (status, _) = request(
        &app,
        "PUT",
        "/api/orders/customer_order:missing",
        Some(&manager),
        Some(json!({
            "table_id": table_id,
            "total_amount": "1",
            "status": "Confirmed",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, created) = request(
        &app,
        "POST",
        "/api/orders",
        None,
        Some(json!({
            "table_id": table_id,
            "items": [{ "menu_item_id": pho_id, "quantity": 1 }],
        })),
    )
    .await;
    let order_id = created["id"].as_str().unwrap().to_string();

    let (status, _) = request(
        &app,
        "PUT",
        &format!("/api/orders/{}", order_id),
        Some(&manager),
        Some(json!({
            "table_id": "dining_table:missing",
            "total_amount": "1",
            "status": "Confirmed",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_is_admin_only_and_removes_the_order() {
    let (app, state) = test_app().await;
    let (table_id, pho_id, _) = seed_catalog(&state).await;

    let (_, created) = request(
        &app,
        "POST",
        "/api/orders",
        None,
        Some(json!({
            "table_id": table_id,
            "items": [{ "menu_item_id": pho_id, "quantity": 1 }],
        })),
    )
    .await;
    let order_id = created["id"].as_str().unwrap().to_string();

    let manager = register_and_login(&app, "mgr3", Some("Manager")).await;
    let (status, _) = request(
        &app,
        "DELETE",
        &format!("/api/orders/{}", order_id),
        Some(&manager),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let admin = login(&app, "admin", common::ADMIN_PASSWORD).await;
    let (status, _) = request(
        &app,
        "DELETE",
        &format!("/api/orders/{}", order_id),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Order and its embedded lines are gone together
    let (status, _) = request(&app, "GET", &format!("/api/orders/{}", order_id), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request(
        &app,
        "DELETE",
        &format!("/api/orders/{}", order_id),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn catalog_and_health_endpoints_are_public() {
    let (app, state) = test_app().await;
    seed_catalog(&state).await;

    let (status, body) = request(&app, "GET", "/api/tables", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["label"], "Table 3");

    let (status, body) = request(&app, "GET", "/api/menu", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Iced tea", "Pho bo"]);

    let (status, body) = request(&app, "GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
