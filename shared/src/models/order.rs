//! Order Model (`pedido`)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Status a new order starts in; counted by the dashboard
pub const ORDER_STATUS_PENDING: &str = "Pendiente";

fn default_status() -> String {
    ORDER_STATUS_PENDING.to_string()
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(rename = "clienteId", default)]
    pub customer_id: Option<String>,
    #[serde(rename = "clienteNombre", default)]
    pub customer_name: Option<String>,
    #[serde(rename = "estado", default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub total: Decimal,
    #[serde(rename = "notas", default)]
    pub notes: Option<String>,
    #[serde(rename = "fechaEntrega", default)]
    pub delivery_date: Option<String>,
    #[serde(rename = "fechaCreacion")]
    pub created_at: DateTime<Utc>,
}

/// Create order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(rename = "clienteId", default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(rename = "clienteNombre", default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(rename = "estado", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub total: Decimal,
    #[serde(rename = "notas", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "fechaEntrega", default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
}

/// Update order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(rename = "clienteId", default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(rename = "clienteNombre", default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(rename = "estado", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,
    #[serde(rename = "notas", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "fechaEntrega", default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
}

impl Order {
    pub fn from_create(id: String, data: OrderCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_id: data.customer_id,
            customer_name: data.customer_name,
            status: data.status.unwrap_or_else(default_status),
            total: data.total,
            notes: data.notes,
            delivery_date: data.delivery_date,
            created_at,
        }
    }

    pub fn apply(&mut self, data: OrderUpdate) {
        if data.customer_id.is_some() {
            self.customer_id = data.customer_id;
        }
        if data.customer_name.is_some() {
            self.customer_name = data.customer_name;
        }
        if let Some(status) = data.status {
            self.status = status;
        }
        if let Some(total) = data.total {
            self.total = total;
        }
        if data.notes.is_some() {
            self.notes = data.notes;
        }
        if data.delivery_date.is_some() {
            self.delivery_date = data.delivery_date;
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == ORDER_STATUS_PENDING
    }
}
