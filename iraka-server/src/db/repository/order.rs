//! Order Repository

use chrono::{DateTime, Utc};
use shared::error::AppResult;
use shared::models::{Order, OrderCreate, OrderUpdate};

use super::{Record, Repository};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_non_negative_amount,
    validate_optional_text, validate_required_text,
};

pub type OrderRepository = Repository<Order>;

impl Record for Order {
    type Create = OrderCreate;
    type Update = OrderUpdate;

    const PREFIX: &'static str = "pedido:";
    const NOT_FOUND: &'static str = "Pedido no encontrado";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, data: OrderCreate, created_at: DateTime<Utc>) -> Self {
        Order::from_create(id, data, created_at)
    }

    fn apply(&mut self, data: OrderUpdate) {
        Order::apply(self, data)
    }

    fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.status, "estado", MAX_SHORT_TEXT_LEN)?;
        validate_non_negative_amount(self.total, "total")?;
        validate_optional_text(&self.customer_name, "clienteNombre", MAX_NAME_LEN)?;
        validate_optional_text(&self.notes, "notas", MAX_NOTE_LEN)?;
        validate_optional_text(&self.delivery_date, "fechaEntrega", MAX_SHORT_TEXT_LEN)?;
        Ok(())
    }
}

impl Repository<Order> {
    /// Orders still in the initial status
    pub async fn count_pending(&self) -> AppResult<usize> {
        let orders = self.find_all().await?;
        Ok(orders.iter().filter(|o| o.is_pending()).count())
    }
}
