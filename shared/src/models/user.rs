//! User Model
//!
//! Users are stored under `user:<email>`. The stored record carries the
//! password hash; everything that leaves the server goes through
//! [`UserInfo`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_active() -> bool {
    true
}

fn default_role() -> String {
    "Vendedor".to_string()
}

/// Stored user record (server side only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// UUID v4
    pub id: String,
    pub email: String,
    #[serde(rename = "passwordHash")]
    pub password_hash: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "rol", default = "default_role")]
    pub role: String,
    #[serde(rename = "activo", default = "default_active")]
    pub active: bool,
    #[serde(rename = "fechaCreacion")]
    pub created_at: DateTime<Utc>,
}

/// User as seen by clients (no password hash)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "rol")]
    pub role: String,
    #[serde(rename = "activo")]
    pub active: bool,
    #[serde(rename = "fechaCreacion")]
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role.clone(),
            active: user.active,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            active: user.active,
            created_at: user.created_at,
        }
    }
}

/// Update user payload; `password` is plain text and re-hashed server side
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "rol", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(rename = "activo", default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl User {
    /// Apply everything except the password, which needs hashing first
    pub fn apply(&mut self, data: &UserUpdate) {
        if let Some(name) = &data.name {
            self.name = name.clone();
        }
        if let Some(role) = &data.role {
            self.role = role.clone();
        }
        if let Some(active) = data.active {
            self.active = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_has_no_hash() {
        let user = User {
            id: "0b9e".to_string(),
            email: "ana@iraka.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            name: "Ana".to_string(),
            role: "admin".to_string(),
            active: true,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(UserInfo::from(&user)).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["nombre"], "Ana");
        assert_eq!(json["activo"], true);
    }

    #[test]
    fn test_stored_user_defaults_active() {
        let user: User = serde_json::from_str(
            r#"{"id":"1","email":"a@b.co","passwordHash":"h","nombre":"A","fechaCreacion":"2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(user.active);
        assert_eq!(user.role, "Vendedor");
    }
}
