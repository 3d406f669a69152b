//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every rating endpoint, the health checks, and the
//! error schemas from [`crate::inbound::http::schemas`]. The document backs
//! Swagger UI in debug builds and is exported by `openapi-dump`.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::tour_ratings::{AverageResponse, RatingDto, RatingRequest};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tour ratings API",
        description = "Customer ratings of tours: create, list, average, replace, patch and delete."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::tour_ratings::create_rating,
        crate::inbound::http::tour_ratings::list_ratings,
        crate::inbound::http::tour_ratings::average_rating,
        crate::inbound::http::tour_ratings::replace_rating,
        crate::inbound::http::tour_ratings::patch_rating,
        crate::inbound::http::tour_ratings::delete_rating,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        RatingRequest,
        RatingDto,
        AverageResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "ratings", description = "Tour rating operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
