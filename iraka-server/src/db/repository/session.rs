//! Session Repository (`session:<token>`)

use std::sync::Arc;

use shared::error::AppResult;
use shared::models::Session;

use crate::store::KvStore;

pub const SESSION_PREFIX: &str = "session:";

#[derive(Clone)]
pub struct SessionRepository {
    store: Arc<dyn KvStore>,
}

impl SessionRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    fn key(token: &str) -> String {
        format!("{SESSION_PREFIX}{token}")
    }

    pub async fn find(&self, token: &str) -> AppResult<Option<Session>> {
        Ok(self.store.get_as(&Self::key(token)).await?)
    }

    pub async fn save(&self, token: &str, session: &Session) -> AppResult<()> {
        Ok(self.store.set_as(&Self::key(token), session).await?)
    }

    pub async fn delete(&self, token: &str) -> AppResult<()> {
        Ok(self.store.delete(&Self::key(token)).await?)
    }
}
