//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.
//! Services can be called directly or through Axum handlers.

pub mod filter;
pub mod location_service;
pub mod map;

// Re-export for convenience
pub use filter::{LocationQuery, SortKey, VisitedFilter};
pub use map::{Marker, MarkerRegistry};
