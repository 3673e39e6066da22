//! Product Repository

use chrono::{DateTime, Utc};
use shared::error::AppResult;
use shared::models::{Product, ProductCreate, ProductUpdate};

use super::{Record, Repository};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN, validate_non_negative_amount,
    validate_non_negative_count, validate_optional_text, validate_required_text,
};

pub type ProductRepository = Repository<Product>;

impl Record for Product {
    type Create = ProductCreate;
    type Update = ProductUpdate;

    const PREFIX: &'static str = "producto:";
    const NOT_FOUND: &'static str = "Producto no encontrado";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, data: ProductCreate, created_at: DateTime<Utc>) -> Self {
        Product::from_create(id, data, created_at)
    }

    fn apply(&mut self, data: ProductUpdate) {
        Product::apply(self, data)
    }

    fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.name, "nombre", MAX_NAME_LEN)?;
        validate_optional_text(&self.category, "categoria", MAX_NAME_LEN)?;
        validate_non_negative_amount(self.price, "precio")?;
        validate_non_negative_count(self.stock, "stock")?;
        validate_optional_text(&self.image, "imagen", MAX_URL_LEN)?;
        validate_optional_text(&self.description, "descripcion", MAX_NOTE_LEN)?;
        Ok(())
    }
}

impl Repository<Product> {
    /// Delete every product; returns how many were removed
    ///
    /// Movements and order lines that reference them are left alone.
    pub async fn clear_all(&self) -> AppResult<usize> {
        let products = self.find_all().await?;
        for product in &products {
            self.store().delete(&product.id).await?;
        }
        Ok(products.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::tests::memory_store;
    use rust_decimal::Decimal;

    fn create(name: &str) -> ProductCreate {
        ProductCreate {
            name: name.to_string(),
            price: Decimal::from(100),
            stock: 1,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_clear_all_counts_and_removes() {
        let store = memory_store();
        let repo = ProductRepository::new(store.clone());
        repo.create(create("A")).await.unwrap();
        repo.create(create("B")).await.unwrap();
        store
            .set("cliente:1-x", serde_json::json!({"keep": true}))
            .await
            .unwrap();

        assert_eq!(repo.clear_all().await.unwrap(), 2);
        assert!(repo.find_all().await.unwrap().is_empty());
        assert!(store.get("cliente:1-x").await.unwrap().is_some());
        assert_eq!(repo.clear_all().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_negative_price_rejected() {
        let repo = ProductRepository::new(memory_store());
        let mut data = create("A");
        data.price = Decimal::from(-5);
        let err = repo.create(data).await.unwrap_err();
        assert_eq!(err.message, "El campo precio no puede ser negativo");
    }

    #[tokio::test]
    async fn test_negative_stock_update_rejected() {
        let repo = ProductRepository::new(memory_store());
        let product = repo.create(create("A")).await.unwrap();
        let err = repo
            .update(
                &product.id,
                ProductUpdate {
                    stock: Some(-1),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.http_status().as_u16(), 400);
        assert_eq!(repo.get(&product.id).await.unwrap().stock, 1);
    }
}
