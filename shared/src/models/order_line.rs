//! Order line Model (`lineapedido`)
//!
//! `pedidoId` and `productoId` are plain strings; nothing checks that the
//! referenced order or product exists.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: String,
    #[serde(rename = "pedidoId")]
    pub order_id: String,
    #[serde(rename = "productoId")]
    pub product_id: String,
    #[serde(rename = "productoNombre", default)]
    pub product_name: Option<String>,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "precioUnitario", default)]
    pub unit_price: Decimal,
    #[serde(default)]
    pub subtotal: Decimal,
    #[serde(rename = "fechaCreacion")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderLineCreate {
    #[serde(rename = "pedidoId", default)]
    pub order_id: String,
    #[serde(rename = "productoId", default)]
    pub product_id: String,
    #[serde(rename = "productoNombre", default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(rename = "cantidad", default)]
    pub quantity: i64,
    #[serde(rename = "precioUnitario", default)]
    pub unit_price: Decimal,
    /// Computed from quantity and unit price when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderLineUpdate {
    #[serde(rename = "pedidoId", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(rename = "productoId", default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(rename = "productoNombre", default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(rename = "cantidad", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(rename = "precioUnitario", default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<Decimal>,
}

// Saturates instead of overflowing; the amount limit rejects it on validation
fn line_subtotal(quantity: i64, unit_price: Decimal) -> Decimal {
    Decimal::from(quantity).saturating_mul(unit_price)
}

impl OrderLine {
    pub fn from_create(id: String, data: OrderLineCreate, created_at: DateTime<Utc>) -> Self {
        let subtotal = data
            .subtotal
            .unwrap_or_else(|| line_subtotal(data.quantity, data.unit_price));
        Self {
            id,
            order_id: data.order_id,
            product_id: data.product_id,
            product_name: data.product_name,
            quantity: data.quantity,
            unit_price: data.unit_price,
            subtotal,
            created_at,
        }
    }

    /// Quantity or price changes recompute the subtotal unless one is given
    pub fn apply(&mut self, data: OrderLineUpdate) {
        let reprice = data.quantity.is_some() || data.unit_price.is_some();
        if let Some(order_id) = data.order_id {
            self.order_id = order_id;
        }
        if let Some(product_id) = data.product_id {
            self.product_id = product_id;
        }
        if data.product_name.is_some() {
            self.product_name = data.product_name;
        }
        if let Some(quantity) = data.quantity {
            self.quantity = quantity;
        }
        if let Some(unit_price) = data.unit_price {
            self.unit_price = unit_price;
        }
        match data.subtotal {
            Some(subtotal) => self.subtotal = subtotal,
            None if reprice => self.subtotal = line_subtotal(self.quantity, self.unit_price),
            None => {}
        }
    }
}
