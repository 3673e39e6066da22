//! Kardex API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::AppResult;
use shared::models::MovementRequest;
use shared::response::{MovementResponse, MovementsResponse, StockSummaryResponse};

use crate::api::ApiJson;
use crate::auth::MaybeUser;
use crate::core::ServerState;
use crate::kardex::KardexService;

/// GET /kardex - every movement, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<MovementsResponse>> {
    let kardex = KardexService::new(state.store.clone());
    Ok(Json(MovementsResponse::ok(kardex.list().await?)))
}

/// POST /kardex - apply a stock movement
///
/// Public route; when a valid session token is sent the movement is
/// attributed to that user.
pub async fn apply(
    State(state): State<ServerState>,
    MaybeUser(caller): MaybeUser,
    ApiJson(payload): ApiJson<MovementRequest>,
) -> AppResult<Json<MovementResponse>> {
    let kardex = KardexService::new(state.store.clone());
    let movement = kardex
        .apply_movement(payload, caller.as_ref().map(|u| u.name.as_str()))
        .await?;
    Ok(Json(MovementResponse::ok(movement)))
}

/// GET /kardex/producto/{id}
pub async fn list_by_product(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MovementsResponse>> {
    let kardex = KardexService::new(state.store.clone());
    Ok(Json(MovementsResponse::ok(kardex.by_product(&id).await?)))
}

/// GET /kardex/existencias
pub async fn stock_summary(
    State(state): State<ServerState>,
) -> AppResult<Json<StockSummaryResponse>> {
    let kardex = KardexService::new(state.store.clone());
    Ok(Json(kardex.stock_summary().await?))
}
