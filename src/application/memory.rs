//! In-memory repository fakes for service-level tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use bigdecimal::BigDecimal;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::customer::CustomerView;
use crate::domain::errors::DomainError;
use crate::domain::order::{OrderLineInput, OrderLineView, OrderView};
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crate::domain::product::{ProductView, StockUpdate};

#[derive(Default, Clone)]
pub struct MemoryCustomers {
    customers: Arc<Mutex<HashMap<Uuid, CustomerView>>>,
}

impl MemoryCustomers {
    pub fn with(customers: Vec<CustomerView>) -> Self {
        Self {
            customers: Arc::new(Mutex::new(
                customers.into_iter().map(|c| (c.id, c)).collect(),
            )),
        }
    }
}

impl CustomerRepository for MemoryCustomers {
    fn find_by_id(&self, id: Uuid) -> Result<Option<CustomerView>, DomainError> {
        Ok(self.customers.lock().unwrap().get(&id).cloned())
    }
}

#[derive(Default, Clone)]
pub struct MemoryProducts {
    products: Arc<Mutex<HashMap<Uuid, ProductView>>>,
}

impl MemoryProducts {
    pub fn with(products: Vec<ProductView>) -> Self {
        Self {
            products: Arc::new(Mutex::new(
                products.into_iter().map(|p| (p.id, p)).collect(),
            )),
        }
    }

    pub fn quantity_of(&self, id: Uuid) -> Option<i32> {
        self.products.lock().unwrap().get(&id).map(|p| p.quantity)
    }

    pub fn set_price(&self, id: Uuid, price: BigDecimal) {
        if let Some(p) = self.products.lock().unwrap().get_mut(&id) {
            p.price = price;
        }
    }
}

impl ProductRepository for MemoryProducts {
    fn find_all_by_id(&self, ids: &[Uuid]) -> Result<Vec<ProductView>, DomainError> {
        let products = self.products.lock().unwrap();
        Ok(ids.iter().filter_map(|id| products.get(id).cloned()).collect())
    }

    fn update_quantity(&self, updates: &[StockUpdate]) -> Result<(), DomainError> {
        let mut products = self.products.lock().unwrap();
        for update in updates {
            if let Some(p) = products.get_mut(&update.id) {
                p.quantity = update.quantity;
            }
        }
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct MemoryOrders {
    orders: Arc<Mutex<Vec<OrderView>>>,
}

impl MemoryOrders {
    pub fn count(&self) -> usize {
        self.orders.lock().unwrap().len()
    }
}

impl OrderRepository for MemoryOrders {
    fn create(
        &self,
        customer_id: Uuid,
        lines: Vec<OrderLineInput>,
    ) -> Result<OrderView, DomainError> {
        let order = OrderView {
            id: Uuid::new_v4(),
            customer_id,
            ordered_at: Utc::now(),
            lines: lines
                .into_iter()
                .map(|l| OrderLineView {
                    id: Uuid::new_v4(),
                    product_id: l.product_id,
                    quantity: l.quantity,
                    price: l.price,
                })
                .collect(),
        };
        self.orders.lock().unwrap().push(order.clone());
        Ok(order)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderView>, DomainError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == id)
            .cloned())
    }
}
