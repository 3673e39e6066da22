//! Auth request/response types shared between server and client

use serde::{Deserialize, Serialize};

use crate::models::UserInfo;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Signup request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "rol", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login response: `{success, accessToken, user}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(rename = "accessToken")]
    pub access_token: String,
    pub user: UserInfo,
}

/// `POST /init/admin` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitAdminResponse {
    pub success: bool,
    pub message: String,
    pub user: UserInfo,
}
