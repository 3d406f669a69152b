//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`TourRepository`], [`TourRatingRepository`]) are
//! implemented by outbound adapters. Driving ports ([`TourRatingsCommand`],
//! [`TourRatingsQuery`]) are implemented by domain services and consumed by
//! inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod tour_rating_repository;
mod tour_ratings_command;
mod tour_ratings_query;
mod tour_repository;

#[cfg(test)]
pub use tour_rating_repository::MockTourRatingRepository;
pub use tour_rating_repository::{
    FixtureTourRatingRepository, TourRatingRepository, TourRatingRepositoryError,
};
#[cfg(test)]
pub use tour_ratings_command::MockTourRatingsCommand;
pub use tour_ratings_command::{
    CreateTourRatingRequest, PatchTourRatingRequest, ReplaceTourRatingRequest, TourRatingsCommand,
};
#[cfg(test)]
pub use tour_ratings_query::MockTourRatingsQuery;
pub use tour_ratings_query::TourRatingsQuery;
#[cfg(test)]
pub use tour_repository::MockTourRepository;
pub use tour_repository::{FixtureTourRepository, TourRepository, TourRepositoryError};
