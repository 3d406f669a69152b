//! Domain primitives, ports, and services.
//!
//! Purpose: define the tour rating model and the use-cases over it without
//! depending on HTTP or SQL. Inbound and outbound adapters depend on this
//! module, never the other way round.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Tour / TourId: the rated entity, opaque beyond existence.
//! - TourRating / TourRatingKey / CustomerId / Score: the rating aggregate.
//! - TourRatingService: implements the driving ports in [`ports`].

pub mod error;
pub mod ports;
pub mod tour;
pub mod tour_rating;
pub mod tour_rating_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::tour::{Tour, TourId};
pub use self::tour_rating::{
    CustomerId, MAX_COMMENT_LENGTH, MAX_SCORE, MIN_SCORE, Score, TourRating, TourRatingKey,
    TourRatingValidationError, average_score, validate_comment,
};
pub use self::tour_rating_service::{NO_RATINGS_MESSAGE, TourRatingService};
pub use self::trace_id::TraceId;

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";
