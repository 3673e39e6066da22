//! API routes
//!
//! # Structure
//!
//! - [`health`] - health checks
//! - [`auth`] - signup, login, session, logout
//! - [`init`] - admin bootstrap
//! - [`customers`] - `/clientes`
//! - [`products`] - `/productos`
//! - [`inventory`] - `/inventarios` (bearer)
//! - [`orders`] - `/pedidos`
//! - [`order_lines`] - `/lineas-pedido`
//! - [`invoices`] - `/facturas`
//! - [`kardex`] - stock movements and stock summary
//! - [`users`] - `/usuarios` (bearer)
//! - [`activity`] - `/actividad` (bearer)
//! - [`dashboard`] - `/dashboard/stats` (bearer)

pub mod json;

pub mod auth;
pub mod health;
pub mod init;

// Records
pub mod customers;
pub mod inventory;
pub mod invoices;
pub mod order_lines;
pub mod orders;
pub mod products;

// Ledger
pub mod kardex;

// Admin
pub mod activity;
pub mod dashboard;
pub mod users;

pub use json::ApiJson;

use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Every API route, relative to the configured prefix (no middleware)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(init::router())
        .merge(customers::router())
        .merge(products::router())
        .merge(inventory::router())
        .merge(orders::router())
        .merge(order_lines::router())
        .merge(invoices::router())
        .merge(kardex::router())
        .merge(users::router())
        .merge(activity::router())
        .merge(dashboard::router())
}

/// Fully configured application: routes nested under `api_prefix`, `/health`
/// also at the root, middleware and state applied
///
/// Used by the HTTP server and by oneshot tests alike.
pub fn build_app(state: ServerState) -> Router {
    let config = &state.config;

    let app = if config.api_prefix.is_empty() {
        build_router()
    } else {
        Router::new()
            .nest(&config.api_prefix, build_router())
            .merge(health::router())
    };

    app
        // ========== Tower HTTP Middleware ==========
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_millis(
            config.request_timeout_ms,
        )))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        // Request ID - generated here, echoed on the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}
