//! Authentication
//!
//! - [`AuthService`] - signup, login, sessions, user administration
//! - [`CurrentUser`] - bearer-token extractor for protected handlers
//! - [`MaybeUser`] - same lookup, but absent or invalid tokens yield `None`

pub mod extractor;
pub mod password;
pub mod service;
pub mod token;

pub use extractor::{MaybeUser, SessionToken};
pub use service::AuthService;

use serde::{Deserialize, Serialize};
use shared::models::User;

/// The authenticated caller of a request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role.clone(),
        }
    }
}
