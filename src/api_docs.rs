use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::locations::list_locations,
        api::locations::get_location,
        api::locations::update_visited,
        // Add other endpoints here as we document them
    ),
    tags(
        (name = "batumi-chill", description = "Batumi Chill Guide API")
    )
)]
pub struct ApiDoc;
