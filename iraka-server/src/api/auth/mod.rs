//! Auth API
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /auth/signup | POST | none |
//! | /auth/login | POST | none |
//! | /auth/session | GET | bearer |
//! | /auth/logout | POST | bearer |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/auth", auth_routes())
}

fn auth_routes() -> Router<ServerState> {
    Router::new()
        .route("/signup", post(handler::signup))
        .route("/login", post(handler::login))
        .route("/session", get(handler::session))
        .route("/logout", post(handler::logout))
}
