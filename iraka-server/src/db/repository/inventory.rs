//! Inventory count Repository

use chrono::{DateTime, Utc};
use shared::error::AppResult;
use shared::models::{Inventory, InventoryCreate, InventoryUpdate};

use super::{Record, Repository};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};

pub type InventoryRepository = Repository<Inventory>;

impl Record for Inventory {
    type Create = InventoryCreate;
    type Update = InventoryUpdate;

    const PREFIX: &'static str = "inventario:";
    const NOT_FOUND: &'static str = "Inventario no encontrado";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, data: InventoryCreate, created_at: DateTime<Utc>) -> Self {
        Inventory::from_create(id, data, created_at)
    }

    fn apply(&mut self, data: InventoryUpdate) {
        Inventory::apply(self, data)
    }

    fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.product, "producto", MAX_NAME_LEN)?;
        validate_optional_text(&self.location, "ubicacion", MAX_NAME_LEN)?;
        validate_optional_text(&self.notes, "notas", MAX_NOTE_LEN)?;
        Ok(())
    }
}
