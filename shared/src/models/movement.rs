//! Kardex (inventory ledger) models

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};

/// Default `usuario` on movements recorded without a session
pub const SYSTEM_USER: &str = "Sistema";

/// Movement kind
///
/// `entrada`, `compra` and `ajuste_entrada` add stock; `salida`, `venta`
/// and `ajuste_salida` remove it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    Entrada,
    Compra,
    AjusteEntrada,
    Salida,
    Venta,
    AjusteSalida,
}

impl MovementKind {
    pub const ALL: [MovementKind; 6] = [
        Self::Entrada,
        Self::Compra,
        Self::AjusteEntrada,
        Self::Salida,
        Self::Venta,
        Self::AjusteSalida,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entrada => "entrada",
            Self::Compra => "compra",
            Self::AjusteEntrada => "ajuste_entrada",
            Self::Salida => "salida",
            Self::Venta => "venta",
            Self::AjusteSalida => "ajuste_salida",
        }
    }

    pub fn is_inward(&self) -> bool {
        matches!(self, Self::Entrada | Self::Compra | Self::AjusteEntrada)
    }

    /// Stock delta for a positive quantity
    pub fn signed(&self, quantity: i64) -> i64 {
        if self.is_inward() { quantity } else { -quantity }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AppError::new(ErrorCode::InvalidMovementKind))
    }
}

/// A recorded ledger entry, stored under `kardex:<millis>-<uuid>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub id: String,
    #[serde(rename = "productoId")]
    pub product_id: String,
    #[serde(rename = "productoNombre")]
    pub product_name: String,
    #[serde(rename = "tipo")]
    pub kind: MovementKind,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "stockAnterior")]
    pub stock_before: i64,
    #[serde(rename = "stockNuevo")]
    pub stock_after: i64,
    #[serde(rename = "referencia", default)]
    pub reference: String,
    #[serde(rename = "notas", default)]
    pub notes: String,
    #[serde(rename = "usuario")]
    pub user: String,
    #[serde(rename = "fecha")]
    pub date: DateTime<Utc>,
}

/// `POST /kardex` body
///
/// Fields stay loose on the wire (`cantidad` may be a number or a numeric
/// string); the ledger engine checks them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovementRequest {
    #[serde(rename = "productoId", default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(rename = "tipo", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "cantidad", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<serde_json::Value>,
    #[serde(rename = "referencia", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "notas", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "usuario", default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl MovementRequest {
    pub fn new(product_id: impl Into<String>, kind: MovementKind, quantity: i64) -> Self {
        Self {
            product_id: Some(product_id.into()),
            kind: Some(kind.as_str().to_string()),
            quantity: Some(serde_json::Value::from(quantity)),
            ..Default::default()
        }
    }
}

/// One row of the stock summary (`existencias`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
    pub stock: i64,
    #[serde(rename = "precio")]
    pub price: Decimal,
    #[serde(rename = "valorInventario")]
    pub inventory_value: Decimal,
    #[serde(rename = "imagen", default)]
    pub image: Option<String>,
}

/// Totals over the stock summary (`resumen`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockTotals {
    #[serde(rename = "totalProductos")]
    pub total_products: usize,
    #[serde(rename = "totalUnidades")]
    pub total_units: i64,
    #[serde(rename = "valorTotal")]
    pub total_value: Decimal,
}
