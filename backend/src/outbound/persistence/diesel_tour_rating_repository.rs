//! PostgreSQL-backed `TourRatingRepository` implementation using Diesel ORM.
//!
//! `save` is a single upsert on the `(tour_id, customer_id)` primary key, so
//! creating a rating for a pair that already has one overwrites it.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{TourRatingRepository, TourRatingRepositoryError};
use crate::domain::{CustomerId, Score, TourId, TourRating, TourRatingKey};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewTourRatingRow, TourRatingRow};
use super::pool::{DbPool, PoolError};
use super::schema::tour_ratings;

/// Diesel-backed implementation of the `TourRatingRepository` port.
#[derive(Clone)]
pub struct DieselTourRatingRepository {
    pool: DbPool,
}

impl DieselTourRatingRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TourRatingRepositoryError {
    map_basic_pool_error(error, TourRatingRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> TourRatingRepositoryError {
    map_basic_diesel_error(
        error,
        TourRatingRepositoryError::query,
        TourRatingRepositoryError::connection,
    )
}

/// Convert a row into a domain rating, rejecting scores the domain forbids.
fn row_to_rating(row: TourRatingRow) -> Result<TourRating, TourRatingRepositoryError> {
    let score = Score::new(row.score).map_err(|err| {
        warn!(
            tour_id = row.tour_id,
            customer_id = row.customer_id,
            %err,
            "stored rating has an invalid score"
        );
        TourRatingRepositoryError::query(format!("invalid stored score: {err}"))
    })?;
    Ok(TourRating::new(
        TourRatingKey::new(TourId::new(row.tour_id), CustomerId::new(row.customer_id)),
        score,
        row.comment,
    ))
}

fn rating_to_row(rating: &TourRating) -> NewTourRatingRow<'_> {
    NewTourRatingRow {
        tour_id: rating.tour_id().value(),
        customer_id: rating.customer_id().value(),
        score: rating.score.value(),
        comment: rating.comment.as_deref(),
    }
}

#[async_trait]
impl TourRatingRepository for DieselTourRatingRepository {
    async fn find_all_by_tour(
        &self,
        tour_id: TourId,
    ) -> Result<Vec<TourRating>, TourRatingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<TourRatingRow> = tour_ratings::table
            .filter(tour_ratings::tour_id.eq(tour_id.value()))
            .order(tour_ratings::customer_id.asc())
            .select(TourRatingRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_rating).collect()
    }

    async fn find_by_tour_and_customer(
        &self,
        key: &TourRatingKey,
    ) -> Result<Option<TourRating>, TourRatingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<TourRatingRow> = tour_ratings::table
            .find((key.tour_id.value(), key.customer_id.value()))
            .select(TourRatingRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_rating).transpose()
    }

    async fn save(&self, rating: &TourRating) -> Result<TourRating, TourRatingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: TourRatingRow = diesel::insert_into(tour_ratings::table)
            .values(rating_to_row(rating))
            .on_conflict((tour_ratings::tour_id, tour_ratings::customer_id))
            .do_update()
            .set((
                tour_ratings::score.eq(excluded(tour_ratings::score)),
                tour_ratings::comment.eq(excluded(tour_ratings::comment)),
            ))
            .returning(TourRatingRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_rating(row)
    }

    async fn delete(&self, key: &TourRatingKey) -> Result<(), TourRatingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(
            tour_ratings::table.find((key.tour_id.value(), key.customer_id.value())),
        )
        .execute(&mut conn)
        .await
        .map(|_| ())
        .map_err(map_diesel_error)
    }
}
