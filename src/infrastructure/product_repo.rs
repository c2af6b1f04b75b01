use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{ProductView, StockUpdate};
use crate::schema::products;

use super::models::ProductRow;

pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for DieselProductRepository {
    fn find_all_by_id(&self, ids: &[Uuid]) -> Result<Vec<ProductView>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = products::table
            .filter(products::id.eq_any(ids))
            .select(ProductRow::as_select())
            .load(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|p| ProductView {
                id: p.id,
                name: p.name,
                price: p.price,
                quantity: p.quantity,
            })
            .collect())
    }

    fn update_quantity(&self, updates: &[StockUpdate]) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            for update in updates {
                diesel::update(products::table.filter(products::id.eq(update.id)))
                    .set((
                        products::quantity.eq(update.quantity),
                        products::updated_at.eq(Utc::now()),
                    ))
                    .execute(conn)?;
            }
            Ok(())
        })
    }
}
