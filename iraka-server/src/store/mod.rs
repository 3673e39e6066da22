//! Key-value store
//!
//! Everything the server persists goes through [`KvStore`]: a flat map from
//! string keys to JSON values with prefix scans. Record types are told apart
//! by key prefix (`producto:`, `kardex:`, `session:` ...).
//!
//! | Backend | Use |
//! |---------|-----|
//! | [`RedbStore`] | `STORE_BACKEND=redb` (default), one `kv` table on disk |
//! | [`MemoryStore`] | `STORE_BACKEND=memory` and tests |
//!
//! There are no transactions across calls. Two writes issued one after the
//! other by a caller can interleave with another request's writes.

mod memory;
mod redb_store;

pub use memory::MemoryStore;
pub use redb_store::RedbStore;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::error::AppError;
use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::database(err.to_string())
    }
}

/// Generic prefix-scannable key-value store
#[async_trait]
pub trait KvStore: Send + Sync + std::fmt::Debug {
    /// Value stored under `key`, if any
    async fn get(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Insert or overwrite
    async fn set(&self, key: &str, value: Value) -> StoreResult<()>;

    /// Remove `key`; absent keys are not an error
    async fn delete(&self, key: &str) -> StoreResult<()>;

    /// All values whose key starts with `prefix`, in key order
    async fn scan_prefix(&self, prefix: &str) -> StoreResult<Vec<Value>>;

    /// Cheap round trip used by the detailed health check
    async fn ping(&self) -> StoreResult<()>;

    /// Backend name for logs and health output
    fn backend(&self) -> &'static str;
}

// Typed helpers shared by every repository
impl dyn KvStore {
    pub async fn get_as<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.get(key).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    pub async fn set_as<T: Serialize + Sync>(&self, key: &str, record: &T) -> StoreResult<()> {
        let value = serde_json::to_value(record)?;
        self.set(key, value).await
    }

    pub async fn scan_as<T: DeserializeOwned>(&self, prefix: &str) -> StoreResult<Vec<T>> {
        self.scan_prefix(prefix)
            .await?
            .into_iter()
            .map(|value| serde_json::from_value(value).map_err(StoreError::from))
            .collect()
    }
}

/// Upper bound for a prefix range scan: every key starting with `prefix`
/// sorts below `prefix + U+10FFFF`.
pub(crate) fn prefix_upper_bound(prefix: &str) -> String {
    let mut end = String::with_capacity(prefix.len() + 4);
    end.push_str(prefix);
    end.push(char::MAX);
    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    /// Behaviour every backend must share
    async fn exercise_backend(store: Arc<dyn KvStore>) {
        assert!(store.get("producto:1").await.unwrap().is_none());

        store.set("producto:2", json!({"n": 2})).await.unwrap();
        store.set("producto:1", json!({"n": 1})).await.unwrap();
        store.set("pedido:1", json!({"n": 9})).await.unwrap();
        store.set("productos", json!({"n": 7})).await.unwrap();

        assert_eq!(store.get("producto:1").await.unwrap(), Some(json!({"n": 1})));

        // Ordered by key, prefix-exact
        let scanned = store.scan_prefix("producto:").await.unwrap();
        assert_eq!(scanned, vec![json!({"n": 1}), json!({"n": 2})]);

        // Upsert
        store.set("producto:1", json!({"n": 10})).await.unwrap();
        assert_eq!(store.get("producto:1").await.unwrap(), Some(json!({"n": 10})));

        store.delete("producto:1").await.unwrap();
        store.delete("producto:missing").await.unwrap();
        assert!(store.get("producto:1").await.unwrap().is_none());
        assert_eq!(store.scan_prefix("producto:").await.unwrap().len(), 1);
        assert!(store.scan_prefix("factura:").await.unwrap().is_empty());

        store.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_memory_backend() {
        exercise_backend(Arc::new(MemoryStore::new())).await;
    }

    #[tokio::test]
    async fn test_redb_backend_in_memory() {
        exercise_backend(Arc::new(RedbStore::open_in_memory().unwrap())).await;
    }

    #[tokio::test]
    async fn test_redb_backend_on_disk_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("iraka.redb");
        {
            let store: Arc<dyn KvStore> = Arc::new(RedbStore::open(&path).unwrap());
            store.set("cliente:1", json!({"nombre": "Ana"})).await.unwrap();
        }
        let store: Arc<dyn KvStore> = Arc::new(RedbStore::open(&path).unwrap());
        let value = store.get("cliente:1").await.unwrap();
        assert_eq!(value, Some(json!({"nombre": "Ana"})));
    }

    #[tokio::test]
    async fn test_typed_helpers() {
        #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        struct Row {
            n: i64,
        }

        let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
        store.set_as("row:1", &Row { n: 1 }).await.unwrap();
        store.set_as("row:2", &Row { n: 2 }).await.unwrap();

        let one: Option<Row> = store.get_as("row:1").await.unwrap();
        assert_eq!(one, Some(Row { n: 1 }));

        let rows: Vec<Row> = store.scan_as("row:").await.unwrap();
        assert_eq!(rows, vec![Row { n: 1 }, Row { n: 2 }]);

        store.set("row:3", json!("not a row")).await.unwrap();
        assert!(matches!(
            store.scan_as::<Row>("row:").await,
            Err(StoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_prefix_upper_bound() {
        let end = prefix_upper_bound("kardex:");
        assert!("kardex:zzzz".to_string() < end);
        assert!("kardex;".to_string() > end);
    }
}
