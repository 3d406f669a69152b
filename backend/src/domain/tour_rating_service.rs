//! Tour rating domain service.
//!
//! Implements the driving ports over the tour and rating repositories. Every
//! operation first verifies that the referenced tour (or rating) exists and
//! turns absence into [`Error::not_found`] with a message clients can show.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    CreateTourRatingRequest, PatchTourRatingRequest, ReplaceTourRatingRequest,
    TourRatingRepository, TourRatingRepositoryError, TourRatingsCommand, TourRatingsQuery,
    TourRepository, TourRepositoryError,
};
use crate::domain::{
    CustomerId, Error, Tour, TourId, TourRating, TourRatingKey, average_score,
};

/// Message returned when a tour has no ratings to average.
pub const NO_RATINGS_MESSAGE: &str = "Tour has no ratings";

/// Tour rating service implementing [`TourRatingsCommand`] and
/// [`TourRatingsQuery`].
#[derive(Clone)]
pub struct TourRatingService<T, R> {
    tours: Arc<T>,
    ratings: Arc<R>,
}

impl<T, R> TourRatingService<T, R> {
    /// Create a new service over the given repositories.
    pub fn new(tours: Arc<T>, ratings: Arc<R>) -> Self {
        Self { tours, ratings }
    }
}

impl<T, R> TourRatingService<T, R>
where
    T: TourRepository,
    R: TourRatingRepository,
{
    fn map_tour_error(error: TourRepositoryError) -> Error {
        match error {
            TourRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("tour repository unavailable: {message}"))
            }
            TourRepositoryError::Query { message } => {
                Error::internal(format!("tour repository error: {message}"))
            }
        }
    }

    fn map_rating_error(error: TourRatingRepositoryError) -> Error {
        match error {
            TourRatingRepositoryError::Connection { message } => Error::service_unavailable(
                format!("tour rating repository unavailable: {message}"),
            ),
            TourRatingRepositoryError::Query { message } => {
                Error::internal(format!("tour rating repository error: {message}"))
            }
        }
    }

    /// Return the tour or fail with `Tour does not exist {tour_id}`.
    async fn verify_tour(&self, tour_id: TourId) -> Result<Tour, Error> {
        self.tours
            .find_by_id(tour_id)
            .await
            .map_err(Self::map_tour_error)?
            .ok_or_else(|| Error::not_found(format!("Tour does not exist {tour_id}")))
    }

    /// Return the rating or fail with a message naming both identifiers.
    ///
    /// The tour is checked first so an unknown tour reports the tour message.
    async fn verify_tour_rating(
        &self,
        tour_id: TourId,
        customer_id: CustomerId,
    ) -> Result<TourRating, Error> {
        self.verify_tour(tour_id).await?;
        let key = TourRatingKey::new(tour_id, customer_id);
        self.ratings
            .find_by_tour_and_customer(&key)
            .await
            .map_err(Self::map_rating_error)?
            .ok_or_else(|| {
                Error::not_found(format!(
                    "Tour rating does not exist for tourId {tour_id} and customerId {customer_id}"
                ))
            })
    }

    async fn save(&self, rating: &TourRating) -> Result<TourRating, Error> {
        self.ratings
            .save(rating)
            .await
            .map_err(Self::map_rating_error)
    }

    async fn ratings_for(&self, tour_id: TourId) -> Result<Vec<TourRating>, Error> {
        self.verify_tour(tour_id).await?;
        self.ratings
            .find_all_by_tour(tour_id)
            .await
            .map_err(Self::map_rating_error)
    }
}

#[async_trait]
impl<T, R> TourRatingsCommand for TourRatingService<T, R>
where
    T: TourRepository,
    R: TourRatingRepository,
{
    async fn create(&self, request: CreateTourRatingRequest) -> Result<TourRating, Error> {
        let tour = self.verify_tour(request.tour_id).await?;
        let rating = TourRating::new(
            TourRatingKey::new(tour.id(), request.customer_id),
            request.score,
            request.comment,
        );
        let saved = self.save(&rating).await?;
        info!(
            tour_id = %saved.tour_id(),
            customer_id = %saved.customer_id(),
            "tour rating created"
        );
        Ok(saved)
    }

    async fn replace(&self, request: ReplaceTourRatingRequest) -> Result<TourRating, Error> {
        let mut rating = self
            .verify_tour_rating(request.tour_id, request.customer_id)
            .await?;
        rating.score = request.score;
        rating.comment = request.comment;
        self.save(&rating).await
    }

    async fn patch(&self, request: PatchTourRatingRequest) -> Result<TourRating, Error> {
        let mut rating = self
            .verify_tour_rating(request.tour_id, request.customer_id)
            .await?;
        if let Some(score) = request.score {
            rating.score = score;
        }
        if let Some(comment) = request.comment {
            rating.comment = Some(comment);
        }
        self.save(&rating).await
    }

    async fn delete(&self, key: TourRatingKey) -> Result<(), Error> {
        let rating = self
            .verify_tour_rating(key.tour_id, key.customer_id)
            .await?;
        self.ratings
            .delete(&rating.key)
            .await
            .map_err(Self::map_rating_error)?;
        info!(
            tour_id = %key.tour_id,
            customer_id = %key.customer_id,
            "tour rating deleted"
        );
        Ok(())
    }
}

#[async_trait]
impl<T, R> TourRatingsQuery for TourRatingService<T, R>
where
    T: TourRepository,
    R: TourRatingRepository,
{
    async fn list_for_tour(&self, tour_id: TourId) -> Result<Vec<TourRating>, Error> {
        let ratings = self.ratings_for(tour_id).await?;
        debug!(%tour_id, count = ratings.len(), "listed tour ratings");
        Ok(ratings)
    }

    async fn average_for_tour(&self, tour_id: TourId) -> Result<f64, Error> {
        let ratings = self.ratings_for(tour_id).await?;
        average_score(&ratings).ok_or_else(|| Error::not_found(NO_RATINGS_MESSAGE))
    }
}

#[cfg(test)]
#[path = "tour_rating_service_tests.rs"]
mod tests;
