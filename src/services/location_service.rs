//! Location Service - Pure business logic without HTTP layer
//!
//! A thin pass-through over the location store, plus the single mutation
//! the application supports: toggling a location's visited flag.

use crate::domain::{DomainError, LocationRepository};
use crate::models::{Category, Location};

/// List every location in the store
pub async fn get_all(repo: &dyn LocationRepository) -> Result<Vec<Location>, DomainError> {
    repo.find_all().await
}

/// Get a single location by ID. A miss is `Ok(None)`, not an error.
pub async fn get_by_id(
    repo: &dyn LocationRepository,
    id: i64,
) -> Result<Option<Location>, DomainError> {
    repo.find_by_id(id).await
}

/// List locations of one category
pub async fn get_by_category(
    repo: &dyn LocationRepository,
    category: Category,
) -> Result<Vec<Location>, DomainError> {
    repo.find_by_category(category).await
}

/// List locations by visited flag
pub async fn get_by_visited(
    repo: &dyn LocationRepository,
    visited: bool,
) -> Result<Vec<Location>, DomainError> {
    repo.find_by_visited(visited).await
}

/// Set the visited flag and persist it. Returns `None` for an unknown id,
/// in which case the store is left unchanged. Concurrent updates to the
/// same id are last-write-wins.
pub async fn update_visited(
    repo: &dyn LocationRepository,
    id: i64,
    visited: bool,
) -> Result<Option<Location>, DomainError> {
    let Some(mut location) = repo.find_by_id(id).await? else {
        return Ok(None);
    };

    location.visited = visited;
    let updated = repo.save(location).await?;

    tracing::info!("Location {} visited set to {}", id, visited);
    Ok(Some(updated))
}
