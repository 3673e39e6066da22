//! Dashboard statistics

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(rename = "totalClientes")]
    pub total_customers: usize,
    #[serde(rename = "totalProductos")]
    pub total_products: usize,
    #[serde(rename = "totalPedidos")]
    pub total_orders: usize,
    #[serde(rename = "totalFacturas")]
    pub total_invoices: usize,
    /// Sum of invoice totals
    #[serde(rename = "totalVentas")]
    pub total_sales: Decimal,
    #[serde(rename = "pedidosPendientes")]
    pub pending_orders: usize,
}
