//! Product Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity
///
/// `stock` is only changed through kardex movements once the product exists;
/// `update` may still overwrite it for manual corrections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Full store key, e.g. `producto:1718000000000-k3x9a2b`
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
    #[serde(rename = "precio", default)]
    pub price: Decimal,
    #[serde(default)]
    pub stock: i64,
    #[serde(rename = "imagen", default)]
    pub image: Option<String>,
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    #[serde(rename = "fechaCreacion")]
    pub created_at: DateTime<Utc>,
}

/// Create product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCreate {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "precio", default)]
    pub price: Decimal,
    #[serde(default)]
    pub stock: i64,
    #[serde(rename = "imagen", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "precio", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(rename = "imagen", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    pub fn from_create(id: String, data: ProductCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: data.name,
            category: data.category,
            price: data.price,
            stock: data.stock,
            image: data.image,
            description: data.description,
            created_at,
        }
    }

    /// Apply a partial update; absent fields keep their value
    pub fn apply(&mut self, data: ProductUpdate) {
        if let Some(name) = data.name {
            self.name = name;
        }
        if let Some(category) = data.category {
            self.category = Some(category);
        }
        if let Some(price) = data.price {
            self.price = price;
        }
        if let Some(stock) = data.stock {
            self.stock = stock;
        }
        if let Some(image) = data.image {
            self.image = Some(image);
        }
        if let Some(description) = data.description {
            self.description = Some(description);
        }
    }

    /// Inventory value: `stock × precio`, `None` on overflow
    pub fn inventory_value(&self) -> Option<Decimal> {
        Decimal::from(self.stock).checked_mul(self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product::from_create(
            "producto:1-abc".to_string(),
            ProductCreate {
                name: "Mochila".to_string(),
                price: Decimal::from(50000),
                stock: 10,
                ..Default::default()
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_wire_names_are_spanish() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["nombre"], "Mochila");
        assert_eq!(json["stock"], 10);
        assert_eq!(json["precio"], 50000.0);
        assert!(json.get("fechaCreacion").is_some());
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let mut product = sample();
        product.apply(ProductUpdate {
            category: Some("Accesorios".to_string()),
            ..Default::default()
        });
        assert_eq!(product.name, "Mochila");
        assert_eq!(product.category.as_deref(), Some("Accesorios"));
        assert_eq!(product.stock, 10);
    }

    #[test]
    fn test_inventory_value() {
        assert_eq!(sample().inventory_value(), Some(Decimal::from(500000)));

        let mut huge = sample();
        huge.stock = 1_000_000_000_000;
        huge.price = Decimal::from(10i64.pow(18)) * Decimal::from(100);
        assert_eq!(huge.inventory_value(), None);
    }

    #[test]
    fn test_create_accepts_numeric_price() {
        let data: ProductCreate =
            serde_json::from_str(r#"{"nombre":"Gorra","precio":19.5,"stock":3}"#).unwrap();
        assert_eq!(data.price, Decimal::new(195, 1));
        assert_eq!(data.stock, 3);
    }
}
