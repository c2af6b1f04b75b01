use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One line of an incoming order request, before validation.
#[derive(Debug, Clone)]
pub struct OrderLineRequest {
    pub product_id: Uuid,
    pub quantity: i32,
}

/// One line ready to persist: the catalog price has been snapshotted onto it.
#[derive(Debug, Clone)]
pub struct OrderLineInput {
    pub product_id: Uuid,
    pub quantity: i32,
    pub price: BigDecimal,
}

#[derive(Debug, Clone)]
pub struct OrderLineView {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub price: BigDecimal,
}

#[derive(Debug, Clone)]
pub struct OrderView {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub ordered_at: DateTime<Utc>,
    pub lines: Vec<OrderLineView>,
}
