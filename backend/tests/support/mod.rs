//! Shared helpers for tour ratings integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`. The
//! in-memory adapters here stand in for PostgreSQL so the full HTTP surface
//! can be exercised through the real domain service.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;
use tour_ratings::Trace;
use tour_ratings::domain::ports::{
    TourRatingRepository, TourRatingRepositoryError, TourRepository, TourRepositoryError,
};
use tour_ratings::domain::{Tour, TourId, TourRating, TourRatingKey, TourRatingService};
use tour_ratings::inbound::http::state::HttpState;
use tour_ratings::inbound::http::tour_ratings::configure;

/// Tour store holding a fixed set of identifiers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTours {
    ids: BTreeSet<i32>,
}

impl InMemoryTours {
    pub fn with_ids(ids: impl IntoIterator<Item = i32>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }
}

#[async_trait]
impl TourRepository for InMemoryTours {
    async fn find_by_id(&self, id: TourId) -> Result<Option<Tour>, TourRepositoryError> {
        Ok(self
            .ids
            .contains(&id.value())
            .then(|| Tour::new(id, format!("Tour {id}"))))
    }
}

/// Rating store keyed by `(tour_id, customer_id)`, iterated in key order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRatings {
    rows: Arc<Mutex<BTreeMap<(i32, i32), TourRating>>>,
}

impl InMemoryRatings {
    fn key(key: &TourRatingKey) -> (i32, i32) {
        (key.tour_id.value(), key.customer_id.value())
    }

    /// Snapshot of a stored rating, bypassing HTTP.
    pub fn get(&self, key: &TourRatingKey) -> Option<TourRating> {
        self.rows
            .lock()
            .expect("ratings lock")
            .get(&Self::key(key))
            .cloned()
    }
}

#[async_trait]
impl TourRatingRepository for InMemoryRatings {
    async fn find_all_by_tour(
        &self,
        tour_id: TourId,
    ) -> Result<Vec<TourRating>, TourRatingRepositoryError> {
        let rows = self.rows.lock().expect("ratings lock");
        Ok(rows
            .values()
            .filter(|rating| rating.tour_id() == tour_id)
            .cloned()
            .collect())
    }

    async fn find_by_tour_and_customer(
        &self,
        key: &TourRatingKey,
    ) -> Result<Option<TourRating>, TourRatingRepositoryError> {
        Ok(self.get(key))
    }

    async fn save(&self, rating: &TourRating) -> Result<TourRating, TourRatingRepositoryError> {
        self.rows
            .lock()
            .expect("ratings lock")
            .insert(Self::key(&rating.key), rating.clone());
        Ok(rating.clone())
    }

    async fn delete(&self, key: &TourRatingKey) -> Result<(), TourRatingRepositoryError> {
        self.rows
            .lock()
            .expect("ratings lock")
            .remove(&Self::key(key));
        Ok(())
    }
}

/// Build the ratings app over in-memory stores, wrapped in the trace
/// middleware like the production server.
pub fn ratings_app(
    tours: InMemoryTours,
    ratings: InMemoryRatings,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let service = Arc::new(TourRatingService::new(Arc::new(tours), Arc::new(ratings)));
    let state = HttpState::new(service.clone(), service);
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
}
