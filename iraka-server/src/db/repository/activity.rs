//! Activity Repository
//!
//! Append-only. Entries are never updated or deleted through the API.

use std::sync::Arc;

use shared::error::AppResult;
use shared::models::Activity;
use shared::util::{generate_key, now};

use crate::store::KvStore;

pub const ACTIVITY_PREFIX: &str = "actividad:";

#[derive(Clone)]
pub struct ActivityRepository {
    store: Arc<dyn KvStore>,
}

impl ActivityRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Append an entry stamped with the current time
    pub async fn log(
        &self,
        user: impl Into<String>,
        user_name: impl Into<String>,
        action: impl Into<String>,
        detail: impl Into<String>,
    ) -> AppResult<Activity> {
        let activity = Activity {
            id: generate_key(ACTIVITY_PREFIX),
            user: user.into(),
            user_name: user_name.into(),
            action: action.into(),
            detail: detail.into(),
            date: now(),
        };
        self.store.set_as(&activity.id, &activity).await?;
        tracing::debug!(action = %activity.action, user = %activity.user, "Activity recorded");
        Ok(activity)
    }

    /// Append an entry after the operation it describes has been written
    ///
    /// A failed write is logged and swallowed; the operation stands.
    pub async fn record(
        &self,
        user: impl Into<String>,
        user_name: impl Into<String>,
        action: impl Into<String>,
        detail: impl Into<String>,
    ) {
        let action = action.into();
        if let Err(e) = self.log(user, user_name, action.clone(), detail).await {
            tracing::warn!(action = %action, error = %e, "Activity entry not recorded");
        }
    }

    /// All entries, newest first
    pub async fn find_recent(&self) -> AppResult<Vec<Activity>> {
        let mut entries: Vec<Activity> = self.store.scan_as(ACTIVITY_PREFIX).await?;
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::tests::{RejectingStore, memory_store};

    #[tokio::test]
    async fn test_log_and_list_newest_first() {
        let repo = ActivityRepository::new(memory_store());
        repo.log("u1", "Ana", "Inicio de sesión", "Ana inició sesión")
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        repo.log("u1", "Ana", "Actualizar Inventario", "Mochila")
            .await
            .unwrap();

        let entries = repo.find_recent().await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].action, "Actualizar Inventario");
        assert!(entries[0].id.starts_with("actividad:"));
    }

    #[tokio::test]
    async fn test_record_swallows_write_failure() {
        let repo = ActivityRepository::new(RejectingStore::new(ACTIVITY_PREFIX));
        assert!(repo.log("u1", "Ana", "Inicio de sesión", "x").await.is_err());

        repo.record("u1", "Ana", "Inicio de sesión", "x").await;
        assert!(repo.find_recent().await.unwrap().is_empty());
    }
}
