//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::AppResult;
use shared::models::{ProductCreate, ProductUpdate};
use shared::response::{Ack, ClearResponse, ProductResponse, ProductsResponse};

use crate::api::ApiJson;
use crate::core::ServerState;
use crate::db::repository::ProductRepository;

/// GET /productos
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ProductsResponse>> {
    let repo = ProductRepository::new(state.store.clone());
    Ok(Json(ProductsResponse::ok(repo.find_all().await?)))
}

/// GET /productos/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductResponse>> {
    let repo = ProductRepository::new(state.store.clone());
    Ok(Json(ProductResponse::ok(repo.get(&id).await?)))
}

/// POST /productos
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<ProductCreate>,
) -> AppResult<Json<ProductResponse>> {
    let repo = ProductRepository::new(state.store.clone());
    let product = repo.create(payload).await?;
    tracing::info!(
        id = %product.id,
        name = %product.name,
        stock = product.stock,
        "Product created"
    );
    Ok(Json(ProductResponse::ok(product)))
}

/// PUT /productos/{id}
///
/// A direct `stock` edit here bypasses the kardex; it is allowed but leaves
/// no movement behind.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<ProductUpdate>,
) -> AppResult<Json<ProductResponse>> {
    let repo = ProductRepository::new(state.store.clone());
    let product = repo.update(&id, payload).await?;
    tracing::info!(id = %product.id, "Product updated");
    Ok(Json(ProductResponse::ok(product)))
}

/// DELETE /productos/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Ack>> {
    let repo = ProductRepository::new(state.store.clone());
    repo.delete(&id).await?;
    tracing::info!(id = %id, "Product deleted");
    Ok(Json(Ack::ok()))
}

/// DELETE /productos/limpiar-todo
pub async fn clear_all(State(state): State<ServerState>) -> AppResult<Json<ClearResponse>> {
    let repo = ProductRepository::new(state.store.clone());
    let removed = repo.clear_all().await?;
    tracing::warn!(removed, "All products deleted");
    Ok(Json(ClearResponse::ok(removed)))
}
