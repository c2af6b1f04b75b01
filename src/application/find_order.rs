use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::OrderView;
use crate::domain::ports::OrderRepository;

/// Pure read: looks an order up by id.
pub struct FindOrderService<O> {
    orders: O,
}

impl<O: OrderRepository> FindOrderService<O> {
    pub fn new(orders: O) -> Self {
        Self { orders }
    }

    pub fn execute(&self, id: Uuid) -> Result<OrderView, DomainError> {
        self.orders
            .find_by_id(id)?
            .ok_or(DomainError::OrderNotFound)
    }
}
