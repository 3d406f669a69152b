//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{TourRatingsCommand, TourRatingsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub ratings: Arc<dyn TourRatingsCommand>,
    pub ratings_query: Arc<dyn TourRatingsQuery>,
}

impl HttpState {
    /// Construct state from the rating command and query ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use tour_ratings::domain::TourRatingService;
    /// use tour_ratings::domain::ports::{FixtureTourRatingRepository, FixtureTourRepository};
    /// use tour_ratings::inbound::http::state::HttpState;
    ///
    /// let service = Arc::new(TourRatingService::new(
    ///     Arc::new(FixtureTourRepository),
    ///     Arc::new(FixtureTourRatingRepository),
    /// ));
    /// let _state = HttpState::new(service.clone(), service);
    /// ```
    pub fn new(
        ratings: Arc<dyn TourRatingsCommand>,
        ratings_query: Arc<dyn TourRatingsQuery>,
    ) -> Self {
        Self {
            ratings,
            ratings_query,
        }
    }
}
