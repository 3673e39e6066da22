//! Inventory API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::AppResult;
use shared::models::{InventoryCreate, InventoryUpdate};
use shared::response::{InventoriesResponse, InventoryResponse};

use crate::api::ApiJson;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{ActivityRepository, InventoryRepository};

/// GET /inventarios
pub async fn list(
    State(state): State<ServerState>,
    _current: CurrentUser,
) -> AppResult<Json<InventoriesResponse>> {
    let repo = InventoryRepository::new(state.store.clone());
    Ok(Json(InventoriesResponse::ok(repo.find_all().await?)))
}

/// GET /inventarios/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    _current: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<InventoryResponse>> {
    let repo = InventoryRepository::new(state.store.clone());
    Ok(Json(InventoryResponse::ok(repo.get(&id).await?)))
}

/// POST /inventarios - records an "Actualizar Inventario" activity
pub async fn create(
    State(state): State<ServerState>,
    current: CurrentUser,
    ApiJson(payload): ApiJson<InventoryCreate>,
) -> AppResult<Json<InventoryResponse>> {
    let repo = InventoryRepository::new(state.store.clone());
    let inventory = repo.create(payload).await?;

    ActivityRepository::new(state.store.clone())
        .record(
            &current.id,
            &current.name,
            "Actualizar Inventario",
            format!("Producto: {}", inventory.product),
        )
        .await;

    tracing::info!(
        id = %inventory.id,
        product = %inventory.product,
        quantity = inventory.quantity,
        by = %current.email,
        "Inventory count recorded"
    );
    Ok(Json(InventoryResponse::ok(inventory)))
}

/// PUT /inventarios/{id}
pub async fn update(
    State(state): State<ServerState>,
    current: CurrentUser,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<InventoryUpdate>,
) -> AppResult<Json<InventoryResponse>> {
    let repo = InventoryRepository::new(state.store.clone());
    let inventory = repo.update(&id, payload).await?;
    tracing::info!(id = %inventory.id, by = %current.email, "Inventory count updated");
    Ok(Json(InventoryResponse::ok(inventory)))
}
