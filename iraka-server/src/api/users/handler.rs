//! User API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::AppResult;
use shared::models::UserUpdate;
use shared::response::{AccountResponse, AccountsResponse};

use crate::api::ApiJson;
use crate::auth::{AuthService, CurrentUser};
use crate::core::ServerState;

/// GET /usuarios - every account, without password hashes
pub async fn list(
    State(state): State<ServerState>,
    _current: CurrentUser,
) -> AppResult<Json<AccountsResponse>> {
    let users = AuthService::from_state(&state).list_users().await?;
    Ok(Json(AccountsResponse::ok(users)))
}

/// GET /usuarios/{email}
pub async fn get_by_email(
    State(state): State<ServerState>,
    _current: CurrentUser,
    Path(email): Path<String>,
) -> AppResult<Json<AccountResponse>> {
    let user = AuthService::from_state(&state).get_user(&email).await?;
    Ok(Json(AccountResponse::ok(user)))
}

/// PUT /usuarios/{email}
pub async fn update(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(email): Path<String>,
    ApiJson(payload): ApiJson<UserUpdate>,
) -> AppResult<Json<AccountResponse>> {
    let user = AuthService::from_state(&state)
        .update_user(&current, &email, payload)
        .await?;
    Ok(Json(AccountResponse::ok(user)))
}
