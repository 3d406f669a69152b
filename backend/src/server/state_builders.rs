//! Builders wiring the ratings service to persistence adapters.

use std::sync::Arc;

use actix_web::web;
use tracing::debug;

use tour_ratings::domain::TourRatingService;
use tour_ratings::domain::ports::{
    FixtureTourRatingRepository, FixtureTourRepository, TourRatingRepository, TourRepository,
};
use tour_ratings::inbound::http::state::HttpState;
use tour_ratings::outbound::persistence::{DieselTourRatingRepository, DieselTourRepository};

use super::ServerConfig;

/// Wrap one service instance behind both driving ports.
fn ratings_state<T, R>(tours: T, ratings: R) -> HttpState
where
    T: TourRepository + 'static,
    R: TourRatingRepository + 'static,
{
    let service = Arc::new(TourRatingService::new(Arc::new(tours), Arc::new(ratings)));
    HttpState::new(service.clone(), service)
}

/// Build the shared HTTP state, using Diesel repositories when a pool is
/// configured and fixtures otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => ratings_state(
            DieselTourRepository::new(pool.clone()),
            DieselTourRatingRepository::new(pool.clone()),
        ),
        None => {
            debug!("no database pool configured; using fixture repositories");
            ratings_state(FixtureTourRepository, FixtureTourRatingRepository)
        }
    };
    web::Data::new(state)
}
