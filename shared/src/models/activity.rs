//! Activity log entry (`actividad`)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    /// Acting user id
    #[serde(rename = "usuario")]
    pub user: String,
    #[serde(rename = "usuarioNombre")]
    pub user_name: String,
    #[serde(rename = "accion")]
    pub action: String,
    #[serde(rename = "detalle", default)]
    pub detail: String,
    #[serde(rename = "fecha")]
    pub date: DateTime<Utc>,
}
