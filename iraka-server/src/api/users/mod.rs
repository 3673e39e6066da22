//! User administration API (bearer auth)
//!
//! Accounts are addressed by email.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/usuarios", user_routes())
}

fn user_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{email}", get(handler::get_by_email).put(handler::update))
}
