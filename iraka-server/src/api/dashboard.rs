//! Dashboard statistics route (bearer auth)

use axum::{Json, Router, extract::State, routing::get};
use shared::error::AppResult;
use shared::models::DashboardStats;
use shared::response::StatsResponse;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{
    CustomerRepository, InvoiceRepository, OrderRepository, ProductRepository,
};

pub fn router() -> Router<ServerState> {
    Router::new().route("/dashboard/stats", get(stats))
}

/// GET /dashboard/stats
///
/// Counts are separate prefix scans, not a consistent snapshot.
pub async fn stats(
    State(state): State<ServerState>,
    _current: CurrentUser,
) -> AppResult<Json<StatsResponse>> {
    let store = state.store.clone();
    let orders = OrderRepository::new(store.clone());
    let invoices = InvoiceRepository::new(store.clone());

    let stats = DashboardStats {
        total_customers: CustomerRepository::new(store.clone()).count().await?,
        total_products: ProductRepository::new(store).count().await?,
        total_orders: orders.count().await?,
        total_invoices: invoices.count().await?,
        total_sales: invoices.total_sales().await?,
        pending_orders: orders.count_pending().await?,
    };
    Ok(Json(StatsResponse::ok(stats)))
}
