//! Tour rating DTOs exchanged over HTTP.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::TourRating;

#[derive(Debug, Deserialize)]
pub(super) struct TourPath {
    pub(super) tour_id: i32,
}

#[derive(Debug, Deserialize)]
pub(super) struct TourCustomerPath {
    pub(super) tour_id: i32,
    pub(super) customer_id: i32,
}

/// Rating body accepted by create, replace, and patch.
///
/// Every field is optional on the wire so missing values are reported as
/// field-level validation errors instead of opaque deserialisation failures.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingRequest {
    #[schema(example = 7)]
    pub customer_id: Option<i32>,
    #[schema(minimum = 1, maximum = 5, example = 5)]
    pub score: Option<i32>,
    #[schema(max_length = 255, example = "great")]
    pub comment: Option<String>,
}

/// A single rating as returned to clients; the tour is implied by the path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingDto {
    pub customer_id: i32,
    pub score: i32,
    pub comment: Option<String>,
}

impl From<TourRating> for RatingDto {
    fn from(value: TourRating) -> Self {
        Self {
            customer_id: value.customer_id().value(),
            score: value.score.value(),
            comment: value.comment,
        }
    }
}

/// Mean score of a tour's ratings.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct AverageResponse {
    #[schema(example = 4.0)]
    pub average: f64,
}
