//! Customer Model (`cliente`)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
    #[serde(rename = "ciudad", default)]
    pub city: Option<String>,
    /// National id / tax number
    #[serde(rename = "documento", default)]
    pub document: Option<String>,
    #[serde(rename = "fechaCreacion")]
    pub created_at: DateTime<Utc>,
}

/// Create customer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerCreate {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "telefono", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "direccion", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "ciudad", default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "documento", default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
}

/// Update customer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "telefono", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "direccion", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "ciudad", default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "documento", default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
}

impl Customer {
    pub fn from_create(id: String, data: CustomerCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: data.name,
            email: data.email,
            phone: data.phone,
            address: data.address,
            city: data.city,
            document: data.document,
            created_at,
        }
    }

    pub fn apply(&mut self, data: CustomerUpdate) {
        if let Some(name) = data.name {
            self.name = name;
        }
        if data.email.is_some() {
            self.email = data.email;
        }
        if data.phone.is_some() {
            self.phone = data.phone;
        }
        if data.address.is_some() {
            self.address = data.address;
        }
        if data.city.is_some() {
            self.city = data.city;
        }
        if data.document.is_some() {
            self.document = data.document;
        }
    }
}
