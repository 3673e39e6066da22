//! Kardex API
//!
//! | Path | Method |
//! |------|--------|
//! | /kardex | GET, POST |
//! | /kardex/producto/{id} | GET |
//! | /kardex/existencias | GET |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/kardex", kardex_routes())
}

fn kardex_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::apply))
        .route("/producto/{id}", get(handler::list_by_product))
        .route("/existencias", get(handler::stock_summary))
}
