//! Tour rating HTTP handlers.
//!
//! ```text
//! POST   /tours/{tour_id}/ratings
//! GET    /tours/{tour_id}/ratings
//! GET    /tours/{tour_id}/ratings/average
//! PUT    /tours/{tour_id}/ratings
//! PATCH  /tours/{tour_id}/ratings
//! DELETE /tours/{tour_id}/ratings/{customer_id}
//! ```
//!
//! Field presence and range checks run before any port is called, so an
//! invalid body is rejected even when the tour does not exist.

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use tracing::debug;

use crate::domain::ports::{
    CreateTourRatingRequest, PatchTourRatingRequest, ReplaceTourRatingRequest,
};
use crate::domain::{CustomerId, TourId, TourRatingKey};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    check_comment, parse_score, require_customer_id, require_score,
};

pub use super::tour_ratings_dto::{AverageResponse, RatingDto, RatingRequest};
use super::tour_ratings_dto::{TourCustomerPath, TourPath};

/// Register every rating route on an Actix service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_rating)
        .service(list_ratings)
        .service(average_rating)
        .service(replace_rating)
        .service(patch_rating)
        .service(delete_rating);
}

/// Rate a tour.
#[utoipa::path(
    post,
    path = "/tours/{tour_id}/ratings",
    params(("tour_id" = i32, Path, description = "Tour identifier")),
    request_body = RatingRequest,
    responses(
        (status = 201, description = "Rating stored"),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Tour does not exist", body = String, content_type = "text/plain"),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["ratings"],
    operation_id = "createTourRating"
)]
#[post("/tours/{tour_id}/ratings")]
pub async fn create_rating(
    state: web::Data<HttpState>,
    path: web::Path<TourPath>,
    payload: web::Json<RatingRequest>,
) -> ApiResult<HttpResponse> {
    let tour_id = TourId::new(path.tour_id);
    let RatingRequest {
        customer_id,
        score,
        comment,
    } = payload.into_inner();
    let customer_id = require_customer_id(customer_id)?;
    let score = require_score(score)?;
    let comment = check_comment(comment)?;
    debug!(%tour_id, %customer_id, "create rating request");

    state
        .ratings
        .create(CreateTourRatingRequest {
            tour_id,
            customer_id,
            score,
            comment,
        })
        .await?;
    Ok(HttpResponse::Created().finish())
}

/// List every rating of a tour.
#[utoipa::path(
    get,
    path = "/tours/{tour_id}/ratings",
    params(("tour_id" = i32, Path, description = "Tour identifier")),
    responses(
        (status = 200, description = "Ratings of the tour", body = [RatingDto]),
        (status = 404, description = "Tour does not exist", body = String, content_type = "text/plain"),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["ratings"],
    operation_id = "listTourRatings"
)]
#[get("/tours/{tour_id}/ratings")]
pub async fn list_ratings(
    state: web::Data<HttpState>,
    path: web::Path<TourPath>,
) -> ApiResult<web::Json<Vec<RatingDto>>> {
    let ratings = state
        .ratings_query
        .list_for_tour(TourId::new(path.tour_id))
        .await?;
    Ok(web::Json(ratings.into_iter().map(RatingDto::from).collect()))
}

/// Mean score of a tour.
#[utoipa::path(
    get,
    path = "/tours/{tour_id}/ratings/average",
    params(("tour_id" = i32, Path, description = "Tour identifier")),
    responses(
        (status = 200, description = "Average score", body = AverageResponse),
        (
            status = 404,
            description = "Tour does not exist or has no ratings",
            body = String,
            content_type = "text/plain"
        ),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["ratings"],
    operation_id = "getTourRatingAverage"
)]
#[get("/tours/{tour_id}/ratings/average")]
pub async fn average_rating(
    state: web::Data<HttpState>,
    path: web::Path<TourPath>,
) -> ApiResult<web::Json<AverageResponse>> {
    let average = state
        .ratings_query
        .average_for_tour(TourId::new(path.tour_id))
        .await?;
    Ok(web::Json(AverageResponse { average }))
}

/// Replace the score and comment of a rating.
///
/// An absent comment clears the stored one.
#[utoipa::path(
    put,
    path = "/tours/{tour_id}/ratings",
    params(("tour_id" = i32, Path, description = "Tour identifier")),
    request_body = RatingRequest,
    responses(
        (status = 200, description = "Updated rating", body = RatingDto),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Tour or rating does not exist", body = String, content_type = "text/plain"),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["ratings"],
    operation_id = "replaceTourRating"
)]
#[put("/tours/{tour_id}/ratings")]
pub async fn replace_rating(
    state: web::Data<HttpState>,
    path: web::Path<TourPath>,
    payload: web::Json<RatingRequest>,
) -> ApiResult<web::Json<RatingDto>> {
    let tour_id = TourId::new(path.tour_id);
    let RatingRequest {
        customer_id,
        score,
        comment,
    } = payload.into_inner();
    let customer_id = require_customer_id(customer_id)?;
    let score = require_score(score)?;
    let comment = check_comment(comment)?;
    debug!(%tour_id, %customer_id, "replace rating request");

    let rating = state
        .ratings
        .replace(ReplaceTourRatingRequest {
            tour_id,
            customer_id,
            score,
            comment,
        })
        .await?;
    Ok(web::Json(RatingDto::from(rating)))
}

/// Update only the supplied fields of a rating.
#[utoipa::path(
    patch,
    path = "/tours/{tour_id}/ratings",
    params(("tour_id" = i32, Path, description = "Tour identifier")),
    request_body = RatingRequest,
    responses(
        (status = 200, description = "Updated rating", body = RatingDto),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Tour or rating does not exist", body = String, content_type = "text/plain"),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["ratings"],
    operation_id = "patchTourRating"
)]
#[patch("/tours/{tour_id}/ratings")]
pub async fn patch_rating(
    state: web::Data<HttpState>,
    path: web::Path<TourPath>,
    payload: web::Json<RatingRequest>,
) -> ApiResult<web::Json<RatingDto>> {
    let tour_id = TourId::new(path.tour_id);
    let RatingRequest {
        customer_id,
        score,
        comment,
    } = payload.into_inner();
    let customer_id = require_customer_id(customer_id)?;
    let score = score.map(parse_score).transpose()?;
    let comment = check_comment(comment)?;
    debug!(%tour_id, %customer_id, "patch rating request");

    let rating = state
        .ratings
        .patch(PatchTourRatingRequest {
            tour_id,
            customer_id,
            score,
            comment,
        })
        .await?;
    Ok(web::Json(RatingDto::from(rating)))
}

/// Remove a customer's rating of a tour.
#[utoipa::path(
    delete,
    path = "/tours/{tour_id}/ratings/{customer_id}",
    params(
        ("tour_id" = i32, Path, description = "Tour identifier"),
        ("customer_id" = i32, Path, description = "Customer identifier")
    ),
    responses(
        (status = 200, description = "Rating removed"),
        (status = 404, description = "Tour or rating does not exist", body = String, content_type = "text/plain"),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["ratings"],
    operation_id = "deleteTourRating"
)]
#[delete("/tours/{tour_id}/ratings/{customer_id}")]
pub async fn delete_rating(
    state: web::Data<HttpState>,
    path: web::Path<TourCustomerPath>,
) -> ApiResult<HttpResponse> {
    let TourCustomerPath {
        tour_id,
        customer_id,
    } = path.into_inner();
    state
        .ratings
        .delete(TourRatingKey::new(
            TourId::new(tour_id),
            CustomerId::new(customer_id),
        ))
        .await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
#[path = "tour_ratings_tests.rs"]
mod tests;
