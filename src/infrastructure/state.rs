//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::LocationRepository;
use crate::infrastructure::SeaOrmLocationRepository;
use crate::services::map::MarkerRegistry;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Location repository
    pub locations: Arc<dyn LocationRepository>,
    /// Per-container map marker state
    pub markers: Arc<MarkerRegistry>,
}

impl AppState {
    /// Create a new AppState backed by the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            locations: Arc::new(SeaOrmLocationRepository::new(db)),
            markers: Arc::new(MarkerRegistry::new()),
        }
    }
}
