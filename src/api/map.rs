//! Map boundary endpoints
//!
//! The UI flow behind these: a filter or sort change recomputes the
//! location list and replaces the container's marker set wholesale.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use super::locations::LocationsParams;
use crate::domain::MapError;
use crate::infrastructure::AppState;
use crate::services::filter;
use crate::services::location_service;

#[derive(Debug, Deserialize)]
pub struct InitializeMapRequest {
    pub lat: f64,
    pub lng: f64,
}

fn map_error_response(error: MapError) -> Response {
    match &error {
        MapError::NotInitialized(_) => (
            StatusCode::CONFLICT,
            Json(json!({"error": error.to_string()})),
        )
            .into_response(),
        MapError::Render(_) => {
            tracing::warn!("Marker update failed: {}", error);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": error.to_string()})),
            )
                .into_response()
        }
    }
}

pub async fn initialize_map(
    State(state): State<AppState>,
    Path(container): Path<String>,
    Json(payload): Json<InitializeMapRequest>,
) -> impl IntoResponse {
    if state.markers.initialize(&container, payload.lat, payload.lng) {
        (
            StatusCode::CREATED,
            Json(json!({
                "message": "Map initialized",
                "container": container
            })),
        )
    } else {
        (
            StatusCode::OK,
            Json(json!({
                "message": "Map already initialized",
                "container": container
            })),
        )
    }
}

pub async fn get_map(State(state): State<AppState>, Path(container): Path<String>) -> Response {
    match state.markers.info(&container) {
        Ok(info) => Json(json!({
            "container": container,
            "map": info
        }))
        .into_response(),
        Err(e) => map_error_response(e),
    }
}

/// Recompute the filtered/sorted location list and replace the container's
/// markers with it
pub async fn set_markers(
    State(state): State<AppState>,
    Path(container): Path<String>,
    Query(params): Query<LocationsParams>,
) -> Response {
    let query = match params.to_query() {
        Ok(query) => query,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(json!({"error": e.to_string()})))
                .into_response();
        }
    };

    let locations = match location_service::get_all(state.locations.as_ref()).await {
        Ok(locations) => filter::filter_and_sort(locations, &query),
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": format!("Database error: {}", e)})),
            )
                .into_response();
        }
    };

    match state.markers.set_markers(&container, &locations) {
        Ok(count) => Json(json!({
            "message": "Markers updated",
            "markers": count
        }))
        .into_response(),
        Err(e) => map_error_response(e),
    }
}

pub async fn get_markers(State(state): State<AppState>, Path(container): Path<String>) -> Response {
    match state.markers.markers(&container) {
        Ok(markers) => Json(json!({
            "markers": markers,
            "total": markers.len()
        }))
        .into_response(),
        Err(e) => map_error_response(e),
    }
}

pub async fn clear_markers(
    State(state): State<AppState>,
    Path(container): Path<String>,
) -> Response {
    match state.markers.clear(&container) {
        Ok(()) => Json(json!({"message": "Markers cleared"})).into_response(),
        Err(e) => map_error_response(e),
    }
}
