//! Repository Module
//!
//! Typed CRUD over key prefixes of the [`KvStore`]. Each record type
//! implements [`Record`] (prefix, create/update payloads, validation) and gets
//! a [`Repository`] for free; the few record-specific queries live next to
//! the `Record` impl.

// Catalog and sales
pub mod customer;
pub mod inventory;
pub mod invoice;
pub mod order;
pub mod order_line;
pub mod product;

// Ledger
pub mod movement;

// Auth and audit
pub mod activity;
pub mod session;
pub mod user;

// Re-exports
pub use activity::ActivityRepository;
pub use customer::CustomerRepository;
pub use inventory::InventoryRepository;
pub use invoice::InvoiceRepository;
pub use movement::MovementRepository;
pub use order::OrderRepository;
pub use order_line::OrderLineRepository;
pub use product::ProductRepository;
pub use session::SessionRepository;
pub use user::UserRepository;

use std::marker::PhantomData;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::{AppError, AppResult};
use shared::util::{generate_key, normalize_key, now};

use crate::store::KvStore;

// =============================================================================
// ID convention: the record id IS its store key, "<prefix><millis>-<suffix>".
// Path parameters may carry the bare suffix; `normalize_key` restores it.
// =============================================================================

/// A record stored under its own key prefix
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Create payload
    type Create: Send;
    /// Partial update payload
    type Update: Send;

    /// Key prefix including the colon, e.g. `"producto:"`
    const PREFIX: &'static str;
    /// 404 message, e.g. `"Producto no encontrado"`
    const NOT_FOUND: &'static str;

    fn id(&self) -> &str;

    fn from_create(id: String, data: Self::Create, created_at: DateTime<Utc>) -> Self;

    /// Apply a partial update; `id` and the creation timestamp never change
    fn apply(&mut self, data: Self::Update);

    /// Boundary checks run on every create and update before writing
    fn validate(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Generic repository over one record type
pub struct Repository<T: Record> {
    store: Arc<dyn KvStore>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self::new(self.store.clone())
    }
}

impl<T: Record> Repository<T> {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    pub fn store(&self) -> &Arc<dyn KvStore> {
        &self.store
    }

    /// Full store key for a wire id (full key or bare suffix)
    pub fn key_for(id: &str) -> String {
        normalize_key(T::PREFIX, id)
    }

    /// Every record of this type, in key (creation) order
    pub async fn find_all(&self) -> AppResult<Vec<T>> {
        Ok(self.store.scan_as(T::PREFIX).await?)
    }

    pub async fn count(&self) -> AppResult<usize> {
        Ok(self.store.scan_prefix(T::PREFIX).await?.len())
    }

    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<T>> {
        Ok(self.store.get_as(&Self::key_for(id)).await?)
    }

    /// Like [`find_by_id`](Self::find_by_id) but absent records are a 404
    pub async fn get(&self, id: &str) -> AppResult<T> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(T::NOT_FOUND))
    }

    pub async fn create(&self, data: T::Create) -> AppResult<T> {
        let record = T::from_create(generate_key(T::PREFIX), data, now());
        record.validate()?;
        self.store.set_as(record.id(), &record).await?;
        Ok(record)
    }

    /// Merge a partial update into an existing record; last writer wins
    pub async fn update(&self, id: &str, data: T::Update) -> AppResult<T> {
        let mut record = self.get(id).await?;
        record.apply(data);
        record.validate()?;
        self.store.set_as(record.id(), &record).await?;
        Ok(record)
    }

    /// Overwrite a record as-is (no validation)
    pub async fn save(&self, record: &T) -> AppResult<()> {
        Ok(self.store.set_as(record.id(), record).await?)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let record = self.get(id).await?;
        self.store.delete(record.id()).await?;
        Ok(())
    }
}
