//! Invoice Model (`factura`)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const INVOICE_STATUS_PENDING: &str = "Pendiente";

fn default_status() -> String {
    INVOICE_STATUS_PENDING.to_string()
}

/// Invoice entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    /// Human-facing invoice number, e.g. `F-2025-001`
    #[serde(rename = "numero", default)]
    pub number: Option<String>,
    #[serde(rename = "pedidoId", default)]
    pub order_id: Option<String>,
    #[serde(rename = "clienteId", default)]
    pub customer_id: Option<String>,
    #[serde(rename = "clienteNombre", default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub total: Decimal,
    #[serde(rename = "estado", default = "default_status")]
    pub status: String,
    #[serde(rename = "metodoPago", default)]
    pub payment_method: Option<String>,
    #[serde(rename = "fechaCreacion")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceCreate {
    #[serde(rename = "numero", default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(rename = "pedidoId", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(rename = "clienteId", default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(rename = "clienteNombre", default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub total: Decimal,
    #[serde(rename = "estado", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "metodoPago", default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceUpdate {
    #[serde(rename = "numero", default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(rename = "pedidoId", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(rename = "clienteId", default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(rename = "clienteNombre", default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,
    #[serde(rename = "estado", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "metodoPago", default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

impl Invoice {
    pub fn from_create(id: String, data: InvoiceCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            number: data.number,
            order_id: data.order_id,
            customer_id: data.customer_id,
            customer_name: data.customer_name,
            total: data.total,
            status: data.status.unwrap_or_else(default_status),
            payment_method: data.payment_method,
            created_at,
        }
    }

    pub fn apply(&mut self, data: InvoiceUpdate) {
        if data.number.is_some() {
            self.number = data.number;
        }
        if data.order_id.is_some() {
            self.order_id = data.order_id;
        }
        if data.customer_id.is_some() {
            self.customer_id = data.customer_id;
        }
        if data.customer_name.is_some() {
            self.customer_name = data.customer_name;
        }
        if let Some(total) = data.total {
            self.total = total;
        }
        if let Some(status) = data.status {
            self.status = status;
        }
        if data.payment_method.is_some() {
            self.payment_method = data.payment_method;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_defaults_to_pending() {
        let data: InvoiceCreate = serde_json::from_str(r#"{"numero":"F-1","total":120.5}"#).unwrap();
        let invoice = Invoice::from_create("factura:1-a".to_string(), data, Utc::now());
        assert_eq!(invoice.status, "Pendiente");
        assert_eq!(invoice.total, Decimal::new(1205, 1));
    }
}
