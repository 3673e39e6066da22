//! Kardex: the inventory ledger
//!
//! The only code path that changes a product's stock after creation. Each
//! applied movement writes a `kardex:` entry with the stock before and after,
//! then rewrites the product with the new stock.
//!
//! # Consistency
//!
//! The two writes are separate store calls. Two movements on the same
//! product applied concurrently can both read the same starting stock, and
//! the later product write wins. Nothing here serialises them.

use std::sync::Arc;

use serde_json::Value;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Movement, MovementKind, MovementRequest, SYSTEM_USER};
use shared::response::StockSummaryResponse;
use shared::util::now;

use crate::db::repository::movement::movement_key;
use crate::db::repository::{MovementRepository, ProductRepository};
use crate::store::KvStore;
use crate::utils::validation::MAX_COUNT;

/// Ledger engine over products and movements
#[derive(Clone)]
pub struct KardexService {
    products: ProductRepository,
    movements: MovementRepository,
}

impl KardexService {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            products: ProductRepository::new(store.clone()),
            movements: MovementRepository::new(store),
        }
    }

    /// Apply one movement to its product
    ///
    /// `caller` is the display name of the authenticated user, if any; it
    /// takes precedence over the `usuario` field of the request.
    ///
    /// Fails without writing anything when a field is missing or malformed,
    /// the product does not exist, or an outward movement would leave stock
    /// below zero.
    pub async fn apply_movement(
        &self,
        request: MovementRequest,
        caller: Option<&str>,
    ) -> AppResult<Movement> {
        let product_id = non_empty(request.product_id.as_deref());
        let kind = non_empty(request.kind.as_deref());
        let quantity = request.quantity.as_ref().filter(|v| is_present(v));

        let (Some(product_id), Some(kind), Some(quantity)) = (product_id, kind, quantity) else {
            return Err(AppError::required_fields());
        };

        let kind: MovementKind = kind.parse()?;
        let quantity = parse_quantity(quantity)?;

        let mut product = self
            .products
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound))?;

        let stock_before = product.stock;
        let stock_after = stock_before
            .checked_add(kind.signed(quantity))
            .filter(|s| *s <= MAX_COUNT)
            .ok_or_else(|| AppError::new(ErrorCode::InvalidQuantity))?;
        if stock_after < 0 {
            tracing::info!(
                product_id = %product.id,
                stock = stock_before,
                requested = quantity,
                kind = %kind,
                "Movement rejected: insufficient stock"
            );
            return Err(AppError::new(ErrorCode::InsufficientStock));
        }

        let user = caller
            .or_else(|| non_empty(request.user.as_deref()))
            .unwrap_or(SYSTEM_USER)
            .to_string();

        let movement = Movement {
            id: movement_key(),
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            kind,
            quantity,
            stock_before,
            stock_after,
            reference: request.reference.unwrap_or_default(),
            notes: request.notes.unwrap_or_default(),
            user,
            date: now(),
        };

        // Movement first, then the product
        self.movements.insert(&movement).await?;
        product.stock = stock_after;
        self.products.save(&product).await?;

        tracing::info!(
            movement_id = %movement.id,
            product_id = %movement.product_id,
            kind = %movement.kind,
            quantity,
            stock_before,
            stock_after,
            "Kardex movement applied"
        );

        Ok(movement)
    }

    /// Every movement, newest first
    pub async fn list(&self) -> AppResult<Vec<Movement>> {
        self.movements.find_all().await
    }

    /// Movements of one product, newest first
    pub async fn by_product(&self, product_id: &str) -> AppResult<Vec<Movement>> {
        self.movements.find_by_product(product_id).await
    }

    /// Current stock of every product with its value and the totals
    pub async fn stock_summary(&self) -> AppResult<StockSummaryResponse> {
        let products = self.products.find_all().await?;
        StockSummaryResponse::from_products(&products)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// null, false, 0 and "" count as absent
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

/// Coerce a JSON number or numeric string to a positive integer
pub fn parse_quantity(value: &Value) -> AppResult<i64> {
    let invalid = || AppError::new(ErrorCode::InvalidQuantity);

    let quantity = match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i,
            None => integral_f64(n.as_f64().ok_or_else(invalid)?).ok_or_else(invalid)?,
        },
        Value::String(s) => {
            let s = s.trim();
            match s.parse::<i64>() {
                Ok(i) => i,
                Err(_) => integral_f64(s.parse::<f64>().map_err(|_| invalid())?)
                    .ok_or_else(invalid)?,
            }
        }
        _ => return Err(invalid()),
    };

    if quantity <= 0 {
        return Err(invalid());
    }
    Ok(quantity)
}

fn integral_f64(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}
