//! Order line Repository

use chrono::{DateTime, Utc};
use shared::error::AppResult;
use shared::models::{OrderLine, OrderLineCreate, OrderLineUpdate};

use super::{Record, Repository};
use crate::utils::validation::{
    MAX_NAME_LEN, validate_non_negative_amount, validate_optional_text, validate_positive_count,
    validate_required_text,
};

pub type OrderLineRepository = Repository<OrderLine>;

impl Record for OrderLine {
    type Create = OrderLineCreate;
    type Update = OrderLineUpdate;

    const PREFIX: &'static str = "lineapedido:";
    const NOT_FOUND: &'static str = "Línea de pedido no encontrada";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, data: OrderLineCreate, created_at: DateTime<Utc>) -> Self {
        OrderLine::from_create(id, data, created_at)
    }

    fn apply(&mut self, data: OrderLineUpdate) {
        OrderLine::apply(self, data)
    }

    fn validate(&self) -> AppResult<()> {
        validate_required_text(&self.order_id, "pedidoId", MAX_NAME_LEN)?;
        validate_required_text(&self.product_id, "productoId", MAX_NAME_LEN)?;
        validate_optional_text(&self.product_name, "productoNombre", MAX_NAME_LEN)?;
        validate_positive_count(self.quantity, "cantidad")?;
        validate_non_negative_amount(self.unit_price, "precioUnitario")?;
        validate_non_negative_amount(self.subtotal, "subtotal")?;
        Ok(())
    }
}

impl Repository<OrderLine> {
    /// Lines whose `pedidoId` matches, full key or bare suffix
    pub async fn by_order(&self, order_id: &str) -> AppResult<Vec<OrderLine>> {
        let wanted = shared::util::normalize_key("pedido:", order_id);
        let lines = self.find_all().await?;
        Ok(lines
            .into_iter()
            .filter(|line| shared::util::normalize_key("pedido:", &line.order_id) == wanted)
            .collect())
    }
}
