//! Invoice Repository

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use shared::models::{Invoice, InvoiceCreate, InvoiceUpdate};

use super::{Record, Repository};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_non_negative_amount, validate_optional_text,
    validate_required_text,
};

pub type InvoiceRepository = Repository<Invoice>;

impl Record for Invoice {
    type Create = InvoiceCreate;
    type Update = InvoiceUpdate;

    const PREFIX: &'static str = "factura:";
    const NOT_FOUND: &'static str = "Factura no encontrada";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, data: InvoiceCreate, created_at: DateTime<Utc>) -> Self {
        Invoice::from_create(id, data, created_at)
    }

    fn apply(&mut self, data: InvoiceUpdate) {
        Invoice::apply(self, data)
    }

    fn validate(&self) -> AppResult<()> {
        validate_optional_text(&self.number, "numero", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.customer_name, "clienteNombre", MAX_NAME_LEN)?;
        validate_required_text(&self.status, "estado", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.payment_method, "metodoPago", MAX_SHORT_TEXT_LEN)?;
        validate_non_negative_amount(self.total, "total")?;
        Ok(())
    }
}

impl Repository<Invoice> {
    /// Sum of all invoice totals
    pub async fn total_sales(&self) -> AppResult<Decimal> {
        let invoices = self.find_all().await?;
        invoices.iter().try_fold(Decimal::ZERO, |acc, i| {
            acc.checked_add(i.total)
                .ok_or_else(|| AppError::internal(format!("Sales total out of range at {}", i.id)))
        })
    }
}
