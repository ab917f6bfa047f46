//! Shared helpers for router-level tests
//!
//! Spins up the real application router against an in-memory database and
//! drives it with tower's `oneshot`.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

use order_server::auth::JwtConfig;
use order_server::core::{Config, ServerState, build_router};
use order_server::db::models::{DiningTableCreate, MenuItemCreate};
use order_server::db::repository::{DiningTableRepository, MenuItemRepository};

pub const ADMIN_PASSWORD: &str = "admin123";

pub fn test_config() -> Config {
    Config {
        work_dir: "./unused-in-tests".to_string(),
        http_port: 0,
        jwt: JwtConfig {
            secret: "integration-test-secret-key-0123456789".to_string(),
            expiration_minutes: 1440,
        },
        environment: "test".to_string(),
        admin_password: ADMIN_PASSWORD.to_string(),
    }
}

/// Fresh app + state on an in-memory database (admin account seeded)
pub async fn test_app() -> (Router, ServerState) {
    let state = ServerState::initialize_in_memory(&test_config())
        .await
        .expect("state init failed");
    (build_router(state.clone()), state)
}

/// Seed one table and two menu items; returns (table_id, pho_id, tea_id)
pub async fn seed_catalog(state: &ServerState) -> (String, String, String) {
    let tables = DiningTableRepository::new(state.get_db());
    let menu = MenuItemRepository::new(state.get_db());

    let table = tables
        .create(DiningTableCreate {
            label: "Table 3".to_string(),
        })
        .await
        .expect("table seed failed");
    let pho = menu
        .create(MenuItemCreate {
            name: "Pho bo".to_string(),
            price: Decimal::from(50000),
        })
        .await
        .expect("menu seed failed");
    let tea = menu
        .create(MenuItemCreate {
            name: "Iced tea".to_string(),
            price: Decimal::from(30000),
        })
        .await
        .expect("menu seed failed");

    (
        table.id.unwrap().to_string(),
        pho.id.unwrap().to_string(),
        tea.id.unwrap().to_string(),
    )
}

/// Fire one request at the router and decode the JSON response
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Register an account and log in, returning the bearer token
pub async fn register_and_login(app: &Router, username: &str, role: Option<&str>) -> String {
    let mut payload = serde_json::json!({
        "username": username,
        "password": "pass-1234",
    });
    if let Some(role) = role {
        payload["role"] = Value::String(role.to_string());
    }

    let (status, _) = request(app, "POST", "/api/auth/register", None, Some(payload)).await;
    assert_eq!(status, StatusCode::OK);

    login(app, username, "pass-1234").await
}

/// Log in and return the bearer token
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(serde_json::json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["token"].as_str().expect("token missing").to_string()
}

/// Parse a decimal field serialized as a string
pub fn dec(value: &Value) -> Decimal {
    value
        .as_str()
        .unwrap_or_else(|| panic!("expected decimal string, got {}", value))
        .parse()
        .expect("invalid decimal")
}
