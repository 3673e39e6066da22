//! Order line API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::AppResult;
use shared::models::{OrderLineCreate, OrderLineUpdate};
use shared::response::{Ack, OrderLineResponse, OrderLinesResponse};

use crate::api::ApiJson;
use crate::core::ServerState;
use crate::db::repository::OrderLineRepository;

/// GET /lineas-pedido
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<OrderLinesResponse>> {
    let repo = OrderLineRepository::new(state.store.clone());
    Ok(Json(OrderLinesResponse::ok(repo.find_all().await?)))
}

/// GET /lineas-pedido/pedido/{order_id}
pub async fn list_by_order(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<OrderLinesResponse>> {
    let repo = OrderLineRepository::new(state.store.clone());
    Ok(Json(OrderLinesResponse::ok(repo.by_order(&order_id).await?)))
}

/// GET /lineas-pedido/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderLineResponse>> {
    let repo = OrderLineRepository::new(state.store.clone());
    Ok(Json(OrderLineResponse::ok(repo.get(&id).await?)))
}

/// POST /lineas-pedido
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<OrderLineCreate>,
) -> AppResult<Json<OrderLineResponse>> {
    let repo = OrderLineRepository::new(state.store.clone());
    let line = repo.create(payload).await?;
    tracing::info!(
        id = %line.id,
        order = %line.order_id,
        quantity = line.quantity,
        subtotal = %line.subtotal,
        "Order line created"
    );
    Ok(Json(OrderLineResponse::ok(line)))
}

/// PUT /lineas-pedido/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<OrderLineUpdate>,
) -> AppResult<Json<OrderLineResponse>> {
    let repo = OrderLineRepository::new(state.store.clone());
    let line = repo.update(&id, payload).await?;
    tracing::info!(id = %line.id, "Order line updated");
    Ok(Json(OrderLineResponse::ok(line)))
}

/// DELETE /lineas-pedido/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Ack>> {
    let repo = OrderLineRepository::new(state.store.clone());
    repo.delete(&id).await?;
    tracing::info!(id = %id, "Order line deleted");
    Ok(Json(Ack::ok()))
}
