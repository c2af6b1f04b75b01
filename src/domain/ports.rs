use uuid::Uuid;

use super::customer::CustomerView;
use super::errors::DomainError;
use super::order::{OrderLineInput, OrderView};
use super::product::{ProductView, StockUpdate};

pub trait CustomerRepository: Send + Sync + 'static {
    fn find_by_id(&self, id: Uuid) -> Result<Option<CustomerView>, DomainError>;
}

pub trait ProductRepository: Send + Sync + 'static {
    /// Bulk lookup; ids missing from the catalog are simply absent from the result.
    fn find_all_by_id(&self, ids: &[Uuid]) -> Result<Vec<ProductView>, DomainError>;
    fn update_quantity(&self, updates: &[StockUpdate]) -> Result<(), DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    /// Persists the order and its lines atomically, returning the stored order.
    fn create(
        &self,
        customer_id: Uuid,
        lines: Vec<OrderLineInput>,
    ) -> Result<OrderView, DomainError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderView>, DomainError>;
}
