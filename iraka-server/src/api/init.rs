//! Admin bootstrap route
//!
//! `POST /init/admin` creates the configured admin account once; later calls
//! return the existing account.

use axum::{Json, Router, extract::State, routing::post};
use shared::client::InitAdminResponse;
use shared::error::AppResult;

use crate::auth::AuthService;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/init/admin", post(init_admin))
}

/// POST /init/admin
pub async fn init_admin(State(state): State<ServerState>) -> AppResult<Json<InitAdminResponse>> {
    let (created, user) = AuthService::from_state(&state)
        .init_admin(&state.config.admin)
        .await?;

    let message = if created {
        "Usuario admin creado exitosamente"
    } else {
        "Usuario admin ya existe"
    };

    Ok(Json(InitAdminResponse {
        success: true,
        message: message.to_string(),
        user,
    }))
}
