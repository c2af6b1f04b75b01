use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{OrderLineInput, OrderLineView, OrderView};
use crate::domain::ports::OrderRepository;
use crate::schema::{order_lines, orders};

use super::models::{NewOrderLineRow, NewOrderRow, OrderLineRow, OrderRow};

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_view(order: OrderRow, lines: Vec<OrderLineRow>) -> OrderView {
    OrderView {
        id: order.id,
        customer_id: order.customer_id,
        ordered_at: order.ordered_at,
        lines: lines
            .into_iter()
            .map(|l| OrderLineView {
                id: l.id,
                product_id: l.product_id,
                quantity: l.quantity,
                price: l.price,
            })
            .collect(),
    }
}

impl OrderRepository for DieselOrderRepository {
    fn create(
        &self,
        customer_id: Uuid,
        lines: Vec<OrderLineInput>,
    ) -> Result<OrderView, DomainError> {
        let mut conn = self.pool.get()?;

        // Order and lines commit together or not at all.
        conn.transaction::<_, DomainError, _>(|conn| {
            let order: OrderRow = diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    id: Uuid::new_v4(),
                    customer_id,
                })
                .returning(OrderRow::as_returning())
                .get_result(conn)?;

            let new_lines: Vec<NewOrderLineRow> = lines
                .into_iter()
                .map(|l| NewOrderLineRow {
                    id: Uuid::new_v4(),
                    order_id: order.id,
                    product_id: l.product_id,
                    quantity: l.quantity,
                    price: l.price,
                })
                .collect();
            let stored_lines: Vec<OrderLineRow> = diesel::insert_into(order_lines::table)
                .values(&new_lines)
                .returning(OrderLineRow::as_returning())
                .get_results(conn)?;

            Ok(to_view(order, stored_lines))
        })
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<OrderView>, DomainError> {
        let mut conn = self.pool.get()?;

        let order = orders::table
            .filter(orders::id.eq(id))
            .select(OrderRow::as_select())
            .first(&mut conn)
            .optional()?;

        let Some(order) = order else {
            return Ok(None);
        };

        let lines = order_lines::table
            .filter(order_lines::order_id.eq(order.id))
            .select(OrderLineRow::as_select())
            .load(&mut conn)?;

        Ok(Some(to_view(order, lines)))
    }
}
