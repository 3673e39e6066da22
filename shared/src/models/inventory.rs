//! Inventory count record (`inventario`)
//!
//! Free-standing stock counts taken by staff. They do not touch product
//! stock; the kardex is the only path that does.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub id: String,
    /// Product name as typed by the operator
    #[serde(rename = "producto")]
    pub product: String,
    #[serde(rename = "productoId", default)]
    pub product_id: Option<String>,
    #[serde(rename = "cantidad", default)]
    pub quantity: i64,
    #[serde(rename = "ubicacion", default)]
    pub location: Option<String>,
    #[serde(rename = "notas", default)]
    pub notes: Option<String>,
    #[serde(rename = "fechaCreacion")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryCreate {
    #[serde(rename = "producto")]
    pub product: String,
    #[serde(rename = "productoId", default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(rename = "cantidad", default)]
    pub quantity: i64,
    #[serde(rename = "ubicacion", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "notas", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryUpdate {
    #[serde(rename = "producto", default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(rename = "productoId", default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(rename = "cantidad", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(rename = "ubicacion", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "notas", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Inventory {
    pub fn from_create(id: String, data: InventoryCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            product: data.product,
            product_id: data.product_id,
            quantity: data.quantity,
            location: data.location,
            notes: data.notes,
            created_at,
        }
    }

    pub fn apply(&mut self, data: InventoryUpdate) {
        if let Some(product) = data.product {
            self.product = product;
        }
        if data.product_id.is_some() {
            self.product_id = data.product_id;
        }
        if let Some(quantity) = data.quantity {
            self.quantity = quantity;
        }
        if data.location.is_some() {
            self.location = data.location;
        }
        if data.notes.is_some() {
            self.notes = data.notes;
        }
    }
}
