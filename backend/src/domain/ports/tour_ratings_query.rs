//! Driving port for rating reads.

use async_trait::async_trait;

use crate::domain::{Error, TourId, TourRating};

/// Read use-cases over tour ratings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TourRatingsQuery: Send + Sync {
    /// All ratings of an existing tour.
    async fn list_for_tour(&self, tour_id: TourId) -> Result<Vec<TourRating>, Error>;

    /// Mean score of an existing tour that has at least one rating.
    async fn average_for_tour(&self, tour_id: TourId) -> Result<f64, Error>;
}
