use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::customer::CustomerView;
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;
use crate::schema::customers;

use super::models::CustomerRow;

pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for DieselCustomerRepository {
    fn find_by_id(&self, id: Uuid) -> Result<Option<CustomerView>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = customers::table
            .filter(customers::id.eq(id))
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(|c| CustomerView {
            id: c.id,
            name: c.name,
            email: c.email,
        }))
    }
}
