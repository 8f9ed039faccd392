use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::Iterable;
use serde::Deserialize;
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::models::Category;
use crate::services::filter::{self, LocationQuery};
use crate::services::location_service;

/// Raw filter/sort parameters as they arrive on the query string
#[derive(Debug, Default, Deserialize)]
pub struct LocationsParams {
    /// Comma-separated canonical category labels
    pub categories: Option<String>,
    /// all | visited | not_visited
    pub visited: Option<String>,
    /// name_asc | name_desc | category_asc | category_desc
    pub sort: Option<String>,
}

impl LocationsParams {
    pub fn to_query(&self) -> Result<LocationQuery, DomainError> {
        LocationQuery::from_params(
            self.categories.as_deref(),
            self.visited.as_deref(),
            self.sort.as_deref(),
        )
    }
}

#[utoipa::path(
    get,
    path = "/api/locations",
    params(
        ("categories" = Option<String>, Query, description = "Comma-separated category labels"),
        ("visited" = Option<String>, Query, description = "all, visited or not_visited"),
        ("sort" = Option<String>, Query, description = "name_asc, name_desc, category_asc or category_desc"),
    ),
    responses(
        (status = 200, description = "Filtered and sorted location list"),
        (status = 400, description = "Unknown filter or sort value")
    )
)]
pub async fn list_locations(
    State(state): State<AppState>,
    Query(params): Query<LocationsParams>,
) -> impl IntoResponse {
    let query = match params.to_query() {
        Ok(query) => query,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(json!({"error": e.to_string()})))
                .into_response();
        }
    };

    match location_service::get_all(state.locations.as_ref()).await {
        Ok(locations) => {
            let locations = filter::filter_and_sort(locations, &query);
            Json(json!({
                "locations": locations,
                "total": locations.len()
            }))
            .into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Database error: {}", e)})),
        )
            .into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/locations/{id}",
    params(
        ("id" = i64, Path, description = "Location id"),
    ),
    responses(
        (status = 200, description = "The location"),
        (status = 404, description = "Unknown location id")
    )
)]
pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match location_service::get_by_id(state.locations.as_ref(), id).await {
        Ok(Some(location)) => Json(json!({"location": location})).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Location not found"})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Database error: {}", e)})),
        )
            .into_response(),
    }
}

// The fixed category set, in declaration order (the filter bar's item source)
pub async fn list_categories() -> impl IntoResponse {
    let categories: Vec<&'static str> = Category::iter().map(|c| c.as_str()).collect();
    Json(json!({"categories": categories}))
}

#[derive(Debug, Deserialize)]
pub struct UpdateVisitedRequest {
    pub visited: bool,
}

#[utoipa::path(
    put,
    path = "/api/locations/{id}/visited",
    params(
        ("id" = i64, Path, description = "Location id"),
    ),
    responses(
        (status = 200, description = "Visited flag updated"),
        (status = 404, description = "Unknown location id")
    )
)]
pub async fn update_visited(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateVisitedRequest>,
) -> impl IntoResponse {
    match location_service::update_visited(state.locations.as_ref(), id, payload.visited).await {
        Ok(Some(location)) => Json(json!({
            "message": "Visited status updated",
            "location": location
        }))
        .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Location not found"})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Database error: {}", e)})),
        )
            .into_response(),
    }
}
