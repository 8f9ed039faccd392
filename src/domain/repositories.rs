//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use crate::models::{Category, Location};

/// Repository trait for the Location entity
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Find all locations
    async fn find_all(&self) -> Result<Vec<Location>, DomainError>;

    /// Find a location by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Location>, DomainError>;

    /// Find all locations of one category
    async fn find_by_category(&self, category: Category) -> Result<Vec<Location>, DomainError>;

    /// Find locations by visited flag
    async fn find_by_visited(&self, visited: bool) -> Result<Vec<Location>, DomainError>;

    /// Insert the location when it has no id yet, update it otherwise
    async fn save(&self, location: Location) -> Result<Location, DomainError>;
}
