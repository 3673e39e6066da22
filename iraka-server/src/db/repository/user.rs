//! User Repository
//!
//! Users are keyed by email (`user:<email>`), so lookups at login are a
//! single `get`.

use std::sync::Arc;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::User;

use crate::store::KvStore;

pub const USER_PREFIX: &str = "user:";

#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn KvStore>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    fn key(email: &str) -> String {
        format!("{USER_PREFIX}{email}")
    }

    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.store.scan_as(USER_PREFIX).await?)
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.store.get_as(&Self::key(email)).await?)
    }

    pub async fn get(&self, email: &str) -> AppResult<User> {
        self.find_by_email(email)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::UserNotFound))
    }

    /// Insert a new user; fails if the email is taken
    pub async fn create(&self, user: &User) -> AppResult<()> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::new(ErrorCode::UserAlreadyExists));
        }
        self.save(user).await
    }

    pub async fn save(&self, user: &User) -> AppResult<()> {
        Ok(self.store.set_as(&Self::key(&user.email), user).await?)
    }
}
