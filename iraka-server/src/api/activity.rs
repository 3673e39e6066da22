//! Activity log route (bearer auth)

use axum::{Json, Router, extract::State, routing::get};
use shared::error::AppResult;
use shared::response::ActivitiesResponse;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::ActivityRepository;

pub fn router() -> Router<ServerState> {
    Router::new().route("/actividad", get(list))
}

/// GET /actividad - newest first
pub async fn list(
    State(state): State<ServerState>,
    _current: CurrentUser,
) -> AppResult<Json<ActivitiesResponse>> {
    let entries = ActivityRepository::new(state.store.clone())
        .find_recent()
        .await?;
    Ok(Json(ActivitiesResponse::ok(entries)))
}
