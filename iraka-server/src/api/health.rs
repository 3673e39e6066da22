//! Health check routes
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /health | GET | none |
//! | /health/detailed | GET | none |

use std::time::Instant;

use axum::{Json, Router, extract::State, routing::get};
use shared::response::{DetailedHealthResponse, HealthResponse, StoreHealth};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/detailed", get(detailed_health))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Servidor Irakaworld funcionando correctamente".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health plus a timed store round trip
pub async fn detailed_health(State(state): State<ServerState>) -> Json<DetailedHealthResponse> {
    let started = Instant::now();
    let store_status = match state.store.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, backend = state.store.backend(), "Store ping failed");
            "error"
        }
    };
    let latency_ms = started.elapsed().as_millis() as u64;

    Json(DetailedHealthResponse {
        status: if store_status == "ok" { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        store: StoreHealth {
            status: store_status.to_string(),
            latency_ms,
        },
    })
}
