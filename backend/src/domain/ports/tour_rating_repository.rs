//! Port for tour rating persistence.
//!
//! The [`TourRatingRepository`] trait defines how ratings keyed by
//! (tour, customer) are stored and retrieved. Adapters provide durable
//! storage; the domain never sees rows or SQL.

use async_trait::async_trait;

use crate::domain::{TourId, TourRating, TourRatingKey};

use super::define_port_error;

define_port_error! {
    /// Errors raised by tour rating repository adapters.
    pub enum TourRatingRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "tour rating repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "tour rating repository query failed: {message}",
    }
}

/// Port for tour rating storage and retrieval.
///
/// # Save semantics
///
/// [`TourRatingRepository::save`] writes the full record for its key. When a
/// rating already exists for the key it is overwritten, otherwise a new one
/// is inserted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TourRatingRepository: Send + Sync {
    /// All ratings of a tour, in storage order.
    async fn find_all_by_tour(
        &self,
        tour_id: TourId,
    ) -> Result<Vec<TourRating>, TourRatingRepositoryError>;

    /// The rating for a (tour, customer) pair, `None` when absent.
    async fn find_by_tour_and_customer(
        &self,
        key: &TourRatingKey,
    ) -> Result<Option<TourRating>, TourRatingRepositoryError>;

    /// Insert or overwrite a rating, returning the stored record.
    async fn save(&self, rating: &TourRating) -> Result<TourRating, TourRatingRepositoryError>;

    /// Remove the rating for a key.
    async fn delete(&self, key: &TourRatingKey) -> Result<(), TourRatingRepositoryError>;
}

/// Fixture implementation for running without a database.
///
/// Lookups return nothing and writes echo their input.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureTourRatingRepository;

#[async_trait]
impl TourRatingRepository for FixtureTourRatingRepository {
    async fn find_all_by_tour(
        &self,
        _tour_id: TourId,
    ) -> Result<Vec<TourRating>, TourRatingRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_tour_and_customer(
        &self,
        _key: &TourRatingKey,
    ) -> Result<Option<TourRating>, TourRatingRepositoryError> {
        Ok(None)
    }

    async fn save(&self, rating: &TourRating) -> Result<TourRating, TourRatingRepositoryError> {
        Ok(rating.clone())
    }

    async fn delete(&self, _key: &TourRatingKey) -> Result<(), TourRatingRepositoryError> {
        Ok(())
    }
}
