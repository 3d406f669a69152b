//! PostgreSQL-backed `TourRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{TourRepository, TourRepositoryError};
use crate::domain::{Tour, TourId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::TourRow;
use super::pool::{DbPool, PoolError};
use super::schema::tours;

/// Diesel-backed implementation of the `TourRepository` port.
#[derive(Clone)]
pub struct DieselTourRepository {
    pool: DbPool,
}

impl DieselTourRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TourRepositoryError {
    map_basic_pool_error(error, TourRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> TourRepositoryError {
    map_basic_diesel_error(
        error,
        TourRepositoryError::query,
        TourRepositoryError::connection,
    )
}

fn row_to_tour(row: TourRow) -> Tour {
    Tour::new(TourId::new(row.id), row.title)
}

#[async_trait]
impl TourRepository for DieselTourRepository {
    async fn find_by_id(&self, id: TourId) -> Result<Option<Tour>, TourRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TourRow> = tours::table
            .find(id.value())
            .select(TourRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_tour))
    }
}
