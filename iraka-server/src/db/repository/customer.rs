//! Customer Repository

use chrono::{DateTime, Utc};
use shared::error::AppResult;
use shared::models::{Customer, CustomerCreate, CustomerUpdate};

use super::{Record, Repository};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_email,
    validate_optional_text, validate_required_text,
};

pub type CustomerRepository = Repository<Customer>;

impl Record for Customer {
    type Create = CustomerCreate;
    type Update = CustomerUpdate;

    const PREFIX: &'static str = "cliente:";
    const NOT_FOUND: &'static str = "Cliente no encontrado";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, data: CustomerCreate, created_at: DateTime<Utc>) -> Self {
        Customer::from_create(id, data, created_at)
    }

    fn apply(&mut self, data: CustomerUpdate) {
        Customer::apply(self, data)
    }

    fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.name, "nombre", MAX_NAME_LEN)?;
        validate_optional_email(&self.email)?;
        validate_optional_text(&self.phone, "telefono", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.address, "direccion", MAX_NOTE_LEN)?;
        validate_optional_text(&self.city, "ciudad", MAX_NAME_LEN)?;
        validate_optional_text(&self.document, "documento", MAX_SHORT_TEXT_LEN)?;
        Ok(())
    }
}
