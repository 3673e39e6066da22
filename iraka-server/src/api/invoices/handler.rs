//! Invoice API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::AppResult;
use shared::models::{InvoiceCreate, InvoiceUpdate};
use shared::response::{Ack, InvoiceResponse, InvoicesResponse};

use crate::api::ApiJson;
use crate::core::ServerState;
use crate::db::repository::InvoiceRepository;

/// GET /facturas
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<InvoicesResponse>> {
    let repo = InvoiceRepository::new(state.store.clone());
    Ok(Json(InvoicesResponse::ok(repo.find_all().await?)))
}

/// GET /facturas/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<InvoiceResponse>> {
    let repo = InvoiceRepository::new(state.store.clone());
    Ok(Json(InvoiceResponse::ok(repo.get(&id).await?)))
}

/// POST /facturas
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<InvoiceCreate>,
) -> AppResult<Json<InvoiceResponse>> {
    let repo = InvoiceRepository::new(state.store.clone());
    let invoice = repo.create(payload).await?;
    tracing::info!(
        id = %invoice.id,
        number = ?invoice.number,
        total = %invoice.total,
        "Invoice created"
    );
    Ok(Json(InvoiceResponse::ok(invoice)))
}

/// PUT /facturas/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<InvoiceUpdate>,
) -> AppResult<Json<InvoiceResponse>> {
    let repo = InvoiceRepository::new(state.store.clone());
    let invoice = repo.update(&id, payload).await?;
    tracing::info!(id = %invoice.id, status = %invoice.status, "Invoice updated");
    Ok(Json(InvoiceResponse::ok(invoice)))
}

/// DELETE /facturas/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Ack>> {
    let repo = InvoiceRepository::new(state.store.clone());
    repo.delete(&id).await?;
    tracing::info!(id = %id, "Invoice deleted");
    Ok(Json(Ack::ok()))
}
