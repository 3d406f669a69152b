//! Driving port for rating mutations.

use async_trait::async_trait;

use crate::domain::{CustomerId, Error, Score, TourId, TourRating, TourRatingKey};

/// Request to rate a tour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTourRatingRequest {
    pub tour_id: TourId,
    pub customer_id: CustomerId,
    pub score: Score,
    pub comment: Option<String>,
}

/// Request to replace every field of an existing rating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceTourRatingRequest {
    pub tour_id: TourId,
    pub customer_id: CustomerId,
    pub score: Score,
    pub comment: Option<String>,
}

/// Request to change only the supplied fields of an existing rating.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchTourRatingRequest {
    pub tour_id: TourId,
    pub customer_id: CustomerId,
    pub score: Option<Score>,
    pub comment: Option<String>,
}

/// Mutating use-cases over tour ratings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TourRatingsCommand: Send + Sync {
    /// Rate an existing tour.
    async fn create(&self, request: CreateTourRatingRequest) -> Result<TourRating, Error>;

    /// Overwrite the score and comment of an existing rating.
    async fn replace(&self, request: ReplaceTourRatingRequest) -> Result<TourRating, Error>;

    /// Overwrite the supplied fields of an existing rating.
    async fn patch(&self, request: PatchTourRatingRequest) -> Result<TourRating, Error>;

    /// Remove an existing rating.
    async fn delete(&self, key: TourRatingKey) -> Result<(), Error>;
}
