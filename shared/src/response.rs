//! API response envelopes
//!
//! Every successful response is a flat object with `success: true` and the
//! payload under a resource-specific key:
//!
//! ```json
//! { "success": true, "producto": { "id": "producto:...", "nombre": "Mochila" } }
//! ```
//!
//! Errors use [`crate::error::ErrorBody`] instead.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{
    Activity, Customer, DashboardStats, Inventory, Invoice, Movement, Order, OrderLine, Product,
    StockItem, StockTotals, UserInfo,
};

/// Declare a `{success, <key>: T}` envelope
macro_rules! envelope {
    ($(#[$meta:meta])* $name:ident { $key:literal : $ty:ty }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Serialize, Deserialize)]
        pub struct $name {
            pub success: bool,
            #[serde(rename = $key)]
            pub data: $ty,
        }

        impl $name {
            pub fn ok(data: $ty) -> Self {
                Self { success: true, data }
            }
        }
    };
}

envelope!(CustomerResponse { "cliente": Customer });
envelope!(CustomersResponse { "clientes": Vec<Customer> });
envelope!(ProductResponse { "producto": Product });
envelope!(ProductsResponse { "productos": Vec<Product> });
envelope!(InventoryResponse { "inventario": Inventory });
envelope!(InventoriesResponse { "inventarios": Vec<Inventory> });
envelope!(OrderResponse { "pedido": Order });
envelope!(OrdersResponse { "pedidos": Vec<Order> });
envelope!(OrderLineResponse { "linea": OrderLine });
envelope!(OrderLinesResponse { "lineasPedido": Vec<OrderLine> });
envelope!(InvoiceResponse { "factura": Invoice });
envelope!(InvoicesResponse { "facturas": Vec<Invoice> });
envelope!(MovementResponse { "movimiento": Movement });
envelope!(MovementsResponse { "movimientos": Vec<Movement> });
envelope!(
    /// `/auth/signup` and `/auth/session`
    UserResponse { "user": UserInfo }
);
envelope!(
    /// `/usuarios/{email}`
    AccountResponse { "usuario": UserInfo }
);
envelope!(AccountsResponse { "usuarios": Vec<UserInfo> });
envelope!(ActivitiesResponse { "actividades": Vec<Activity> });
envelope!(StatsResponse { "stats": DashboardStats });
envelope!(
    /// `DELETE /productos/limpiar-todo`
    ClearResponse { "eliminados": usize }
);

/// Bare `{success: true}` returned by deletes and logout
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// `GET /kardex/existencias`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockSummaryResponse {
    pub success: bool,
    #[serde(rename = "existencias")]
    pub items: Vec<StockItem>,
    #[serde(rename = "resumen")]
    pub totals: StockTotals,
}

impl StockSummaryResponse {
    /// Build the summary rows and totals from the current products
    ///
    /// Fails with an internal error when a value or a total does not fit.
    pub fn from_products(products: &[Product]) -> AppResult<Self> {
        let mut items = Vec::with_capacity(products.len());
        let mut totals = StockTotals {
            total_products: products.len(),
            ..Default::default()
        };
        for p in products {
            let inventory_value = p
                .inventory_value()
                .ok_or_else(|| out_of_range(&p.id))?;
            totals.total_units = totals
                .total_units
                .checked_add(p.stock)
                .ok_or_else(|| out_of_range(&p.id))?;
            totals.total_value = totals
                .total_value
                .checked_add(inventory_value)
                .ok_or_else(|| out_of_range(&p.id))?;
            items.push(StockItem {
                id: p.id.clone(),
                name: p.name.clone(),
                category: p.category.clone(),
                stock: p.stock,
                price: p.price,
                inventory_value,
                image: p.image.clone(),
            });
        }
        Ok(Self {
            success: true,
            items,
            totals,
        })
    }
}

fn out_of_range(product_id: &str) -> AppError {
    AppError::internal(format!("Inventory value out of range at {product_id}"))
}

/// `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

/// Store probe result inside [`DetailedHealthResponse`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreHealth {
    pub status: String,
    #[serde(rename = "latencyMs")]
    pub latency_ms: u64,
}

/// `GET /health/detailed`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    pub status: String,
    pub version: String,
    #[serde(rename = "uptimeSeconds")]
    pub uptime_seconds: u64,
    pub store: StoreHealth,
}
