//! Kardex movement Repository (`kardex:<millis>-<uuid>`)

use std::sync::Arc;

use shared::error::AppResult;
use shared::models::Movement;
use shared::util::normalize_key;

use crate::store::KvStore;

pub const MOVEMENT_PREFIX: &str = "kardex:";

/// Movement key: millisecond timestamp plus a UUID
pub fn movement_key() -> String {
    format!(
        "{MOVEMENT_PREFIX}{}-{}",
        shared::util::now_millis(),
        uuid::Uuid::new_v4()
    )
}

#[derive(Clone)]
pub struct MovementRepository {
    store: Arc<dyn KvStore>,
}

impl MovementRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub async fn insert(&self, movement: &Movement) -> AppResult<()> {
        Ok(self.store.set_as(&movement.id, movement).await?)
    }

    /// Every movement, newest first
    pub async fn find_all(&self) -> AppResult<Vec<Movement>> {
        let mut movements: Vec<Movement> = self.store.scan_as(MOVEMENT_PREFIX).await?;
        sort_newest_first(&mut movements);
        Ok(movements)
    }

    /// Movements of one product, newest first
    pub async fn find_by_product(&self, product_id: &str) -> AppResult<Vec<Movement>> {
        let wanted = normalize_key("producto:", product_id);
        let mut movements: Vec<Movement> = self
            .store
            .scan_as::<Movement>(MOVEMENT_PREFIX)
            .await?
            .into_iter()
            .filter(|m| normalize_key("producto:", &m.product_id) == wanted)
            .collect();
        sort_newest_first(&mut movements);
        Ok(movements)
    }
}

// Ties on `fecha` fall back to the key, which starts with the same millis
fn sort_newest_first(movements: &mut [Movement]) {
    movements.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
}
