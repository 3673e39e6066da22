//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::AppResult;
use shared::models::{CustomerCreate, CustomerUpdate};
use shared::response::{Ack, CustomerResponse, CustomersResponse};

use crate::api::ApiJson;
use crate::core::ServerState;
use crate::db::repository::CustomerRepository;

/// GET /clientes
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<CustomersResponse>> {
    let repo = CustomerRepository::new(state.store.clone());
    Ok(Json(CustomersResponse::ok(repo.find_all().await?)))
}

/// GET /clientes/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<CustomerResponse>> {
    let repo = CustomerRepository::new(state.store.clone());
    Ok(Json(CustomerResponse::ok(repo.get(&id).await?)))
}

/// POST /clientes
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(payload): ApiJson<CustomerCreate>,
) -> AppResult<Json<CustomerResponse>> {
    let repo = CustomerRepository::new(state.store.clone());
    let customer = repo.create(payload).await?;
    tracing::info!(id = %customer.id, name = %customer.name, "Customer created");
    Ok(Json(CustomerResponse::ok(customer)))
}

/// PUT /clientes/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<CustomerUpdate>,
) -> AppResult<Json<CustomerResponse>> {
    let repo = CustomerRepository::new(state.store.clone());
    let customer = repo.update(&id, payload).await?;
    tracing::info!(id = %customer.id, "Customer updated");
    Ok(Json(CustomerResponse::ok(customer)))
}

/// DELETE /clientes/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Ack>> {
    let repo = CustomerRepository::new(state.store.clone());
    repo.delete(&id).await?;
    tracing::info!(id = %id, "Customer deleted");
    Ok(Json(Ack::ok()))
}
