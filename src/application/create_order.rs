use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{OrderLineInput, OrderLineRequest, OrderView};
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crate::domain::product::{ProductView, StockUpdate};

/// Validates and persists a new order.
///
/// The customer must exist, every requested product must exist in the
/// catalog, and no line may ask for more than the available stock. On
/// success the catalog price at call time is snapshotted onto each line
/// and the stock of each product is reduced by the ordered quantity.
pub struct CreateOrderService<O, P, C> {
    orders: O,
    products: P,
    customers: C,
}

impl<O, P, C> CreateOrderService<O, P, C>
where
    O: OrderRepository,
    P: ProductRepository,
    C: CustomerRepository,
{
    pub fn new(orders: O, products: P, customers: C) -> Self {
        Self {
            orders,
            products,
            customers,
        }
    }

    pub fn execute(
        &self,
        customer_id: Uuid,
        products: Vec<OrderLineRequest>,
    ) -> Result<OrderView, DomainError> {
        let customer = self
            .customers
            .find_by_id(customer_id)?
            .ok_or(DomainError::CustomerNotFound)?;

        let requested_ids: Vec<Uuid> = products.iter().map(|l| l.product_id).collect();
        let catalog = self.products.find_all_by_id(&requested_ids)?;
        if catalog.is_empty() {
            return Err(DomainError::ProductsNotFound);
        }

        let by_id: HashMap<Uuid, &ProductView> = catalog.iter().map(|p| (p.id, p)).collect();

        // Report the first requested id missing from the catalog.
        if let Some(missing) = products.iter().find(|l| !by_id.contains_key(&l.product_id)) {
            return Err(DomainError::ProductNotFound(missing.product_id));
        }

        for line in &products {
            if line.quantity > by_id[&line.product_id].quantity {
                return Err(DomainError::InsufficientStock(line.product_id));
            }
        }

        let lines: Vec<OrderLineInput> = products
            .iter()
            .map(|l| OrderLineInput {
                product_id: l.product_id,
                quantity: l.quantity,
                price: by_id[&l.product_id].price.clone(),
            })
            .collect();

        let order = self.orders.create(customer.id, lines)?;

        // Separate write from the order insert: if this fails the order is
        // already committed and the stock has not been deducted.
        let updates: Vec<StockUpdate> = order
            .lines
            .iter()
            .map(|l| StockUpdate {
                id: l.product_id,
                quantity: by_id[&l.product_id].quantity - l.quantity,
            })
            .collect();
        self.products.update_quantity(&updates)?;

        Ok(order)
    }
}
