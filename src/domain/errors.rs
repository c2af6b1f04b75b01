use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Customer not found")]
    CustomerNotFound,
    #[error("No products found for the requested ids")]
    ProductsNotFound,
    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),
    #[error("Insufficient stock for product {0}")]
    InsufficientStock(Uuid),
    #[error("Order not found")]
    OrderNotFound,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Internal error: {0}")]
    Internal(String),
}
