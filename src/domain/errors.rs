//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Resource not found
    NotFound,
    /// Validation error with message
    Validation(String),
    /// Database/persistence error
    Database(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}

/// Failures of the map marker registry. Never fatal: callers surface these
/// and the registry state is left untouched.
#[derive(Debug, PartialEq)]
pub enum MapError {
    /// Operation on a container that was never initialized
    NotInitialized(String),
    /// Marker update could not be rendered; retrying the same call is safe
    Render(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::NotInitialized(container) => {
                write!(f, "Map not initialized for container '{}'", container)
            }
            MapError::Render(msg) => write!(f, "Marker render error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}
