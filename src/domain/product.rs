use bigdecimal::BigDecimal;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: i32,
}

/// Absolute stock level to write back for one product.
#[derive(Debug, Clone)]
pub struct StockUpdate {
    pub id: Uuid,
    pub quantity: i32,
}
