pub mod health;
pub mod locations;
pub mod map;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Locations
        .route("/locations", get(locations::list_locations))
        .route("/locations/categories", get(locations::list_categories))
        .route("/locations/:id", get(locations::get_location))
        .route("/locations/:id/visited", put(locations::update_visited))
        // Map containers
        .route(
            "/map/:container",
            post(map::initialize_map).get(map::get_map),
        )
        .route(
            "/map/:container/markers",
            put(map::set_markers)
                .get(map::get_markers)
                .delete(map::clear_markers),
        )
        .with_state(state)
}
