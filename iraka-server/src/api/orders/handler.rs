//! Order API Handlers
//!
//! Orders carry a free-form `estado`; lines are managed separately under
//! `/lineas-pedido` and are not removed with their order.

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::AppResult;
use shared::models::{OrderCreate, OrderUpdate};
use shared::response::{Ack, OrderResponse, OrdersResponse};

use crate::api::ApiJson;
use crate::core::ServerState;
use crate::db::repository::OrderRepository;

/// GET /pedidos
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<OrdersResponse>> {
    let repo = OrderRepository::new(state.store.clone());
    Ok(Json(OrdersResponse::ok(repo.find_all().await?)))
}

/// GET /pedidos/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderResponse>> {
    let repo = OrderRepository::new(state.store.clone());
    Ok(Json(OrderResponse::ok(repo.get(&id).await?)))
}

/// POST /pedidos
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<OrderCreate>,
) -> AppResult<Json<OrderResponse>> {
    let repo = OrderRepository::new(state.store.clone());
    let order = repo.create(payload).await?;
    tracing::info!(
        id = %order.id,
        customer = ?order.customer_id,
        total = %order.total,
        "Order created"
    );
    Ok(Json(OrderResponse::ok(order)))
}

/// PUT /pedidos/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<OrderUpdate>,
) -> AppResult<Json<OrderResponse>> {
    let repo = OrderRepository::new(state.store.clone());
    let order = repo.update(&id, payload).await?;
    tracing::info!(id = %order.id, status = %order.status, "Order updated");
    Ok(Json(OrderResponse::ok(order)))
}

/// DELETE /pedidos/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Ack>> {
    let repo = OrderRepository::new(state.store.clone());
    repo.delete(&id).await?;
    tracing::info!(id = %id, "Order deleted");
    Ok(Json(Ack::ok()))
}
