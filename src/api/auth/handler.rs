//! Authentication Handlers
//!
//! Registration and login. Both endpoints are public; login failures are
//! reported with a single error class so responses cannot be used to
//! probe which usernames exist.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::AccountCreate;
use crate::db::repository::AccountRepository;
use crate::utils::{AppError, AppResult};

/// Register payload
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    /// Role is caller-supplied; omitted means "User"
    pub role: Option<String>,
}

/// Login payload
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Plain confirmation body
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<MessageResponse>> {
    if req.username.trim().is_empty() {
        return Err(AppError::validation("Username must not be empty"));
    }
    if req.password.is_empty() {
        return Err(AppError::validation("Password must not be empty"));
    }

    let repo = AccountRepository::new(state.get_db());
    let account = repo
        .create(AccountCreate {
            username: req.username,
            password: req.password,
            role: req.role,
        })
        .await?;

    tracing::info!(username = %account.username, role = %account.role, "Account registered");

    Ok(Json(MessageResponse {
        message: "Registration successful".to_string(),
    }))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let repo = AccountRepository::new(state.get_db());
    let account = repo.find_by_username(&req.username).await?;

    // Unknown username and wrong password collapse into one error class
    let account = match account {
        Some(a) => a,
        None => {
            tracing::warn!(username = %req.username, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let password_valid = account
        .verify_password(&req.password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;
    if !password_valid {
        tracing::warn!(username = %req.username, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(&account.username, &account.role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(username = %account.username, role = %account.role, "User logged in");

    Ok(Json(LoginResponse { token }))
}
