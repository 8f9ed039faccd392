//! Map marker registry
//!
//! Holds, per map container, the map center/zoom and the currently
//! displayed markers. Marker updates are replace-all: the previous set is
//! dropped and the new one installed in input order. Operations on a
//! container that was never initialized report the condition and leave the
//! registry untouched.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde::Serialize;

use crate::domain::MapError;
use crate::models::{Category, Location};

/// Zoom level for newly initialized maps
const DEFAULT_ZOOM: u8 = 13;

/// A map-rendered representation of one location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: i64,
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub category: Category,
    pub visited: bool,
}

/// Center, zoom and marker count of one container's map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapInfo {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
    pub markers: usize,
}

#[derive(Debug)]
struct MapSession {
    center_lat: f64,
    center_lng: f64,
    zoom: u8,
    markers: Vec<Marker>,
}

/// Per-container map state, keyed by container id. Owned by the
/// application state and passed explicitly to whoever renders a map.
#[derive(Debug, Default)]
pub struct MarkerRegistry {
    maps: DashMap<String, MapSession>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the map for a container, centered at the given coordinates.
    /// Idempotent per container: a second call is a no-op that returns
    /// false and keeps the original center.
    pub fn initialize(&self, container_id: &str, center_lat: f64, center_lng: f64) -> bool {
        match self.maps.entry(container_id.to_string()) {
            Entry::Occupied(_) => {
                tracing::debug!("Map already initialized for container '{}'", container_id);
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(MapSession {
                    center_lat,
                    center_lng,
                    zoom: DEFAULT_ZOOM,
                    markers: Vec::new(),
                });
                tracing::info!(
                    "Map initialized for container '{}' at ({}, {})",
                    container_id,
                    center_lat,
                    center_lng
                );
                true
            }
        }
    }

    /// Replace the container's whole marker set with one marker per given
    /// location, in input order. Nothing is modified on error, so a failed
    /// update can simply be retried.
    pub fn set_markers(
        &self,
        container_id: &str,
        locations: &[Location],
    ) -> Result<usize, MapError> {
        let mut session = self
            .maps
            .get_mut(container_id)
            .ok_or_else(|| MapError::NotInitialized(container_id.to_string()))?;

        let mut markers = Vec::with_capacity(locations.len());
        for location in locations {
            if !location.latitude.is_finite() || !location.longitude.is_finite() {
                return Err(MapError::Render(format!(
                    "invalid coordinates for '{}'",
                    location.name
                )));
            }

            markers.push(Marker {
                id: location.id.unwrap_or_default(),
                lat: location.latitude,
                lng: location.longitude,
                name: location.name.clone(),
                category: location.category,
                visited: location.visited,
            });
        }

        let count = markers.len();
        session.markers = markers;
        Ok(count)
    }

    /// Remove all markers for a container, leaving the map itself intact
    pub fn clear(&self, container_id: &str) -> Result<(), MapError> {
        let mut session = self
            .maps
            .get_mut(container_id)
            .ok_or_else(|| MapError::NotInitialized(container_id.to_string()))?;

        session.markers.clear();
        Ok(())
    }

    /// Currently displayed markers for a container
    pub fn markers(&self, container_id: &str) -> Result<Vec<Marker>, MapError> {
        let session = self
            .maps
            .get(container_id)
            .ok_or_else(|| MapError::NotInitialized(container_id.to_string()))?;

        Ok(session.markers.clone())
    }

    /// Center, zoom and marker count for a container
    pub fn info(&self, container_id: &str) -> Result<MapInfo, MapError> {
        let session = self
            .maps
            .get(container_id)
            .ok_or_else(|| MapError::NotInitialized(container_id.to_string()))?;

        Ok(MapInfo {
            center_lat: session.center_lat,
            center_lng: session.center_lng,
            zoom: session.zoom,
            markers: session.markers.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: i64, name: &str, lat: f64, lng: f64) -> Location {
        Location {
            id: Some(id),
            name: name.to_string(),
            description: String::new(),
            category: Category::Beach,
            visited: false,
            latitude: lat,
            longitude: lng,
            photos: Vec::new(),
            address: None,
            phone: None,
            website: None,
            opening_hours: None,
            external_map_url: None,
            coolness_rating: None,
        }
    }

    #[test]
    fn initialize_is_idempotent_and_keeps_first_center() {
        let registry = MarkerRegistry::new();

        assert!(registry.initialize("map-container", 41.6168, 41.6367));
        assert!(!registry.initialize("map-container", 0.0, 0.0));

        let info = registry.info("map-container").unwrap();
        assert_eq!(info.center_lat, 41.6168);
        assert_eq!(info.center_lng, 41.6367);
        assert_eq!(info.zoom, 13);
        assert_eq!(info.markers, 0);
    }

    #[test]
    fn set_markers_replaces_whole_set_in_input_order() {
        let registry = MarkerRegistry::new();
        registry.initialize("map-container", 41.6168, 41.6367);

        let count = registry
            .set_markers(
                "map-container",
                &[
                    location(1, "Sarpi Beach", 41.5232, 41.5465),
                    location(2, "Old Town", 41.6491, 41.6387),
                ],
            )
            .unwrap();
        assert_eq!(count, 2);

        let markers = registry.markers("map-container").unwrap();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].id, 1);
        assert_eq!(markers[1].name, "Old Town");

        // Replace-all: the previous two markers are gone
        registry
            .set_markers("map-container", &[location(3, "Piazza", 41.6518, 41.6369)])
            .unwrap();
        let markers = registry.markers("map-container").unwrap();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].id, 3);
    }

    #[test]
    fn empty_update_after_nonempty_leaves_zero_markers() {
        let registry = MarkerRegistry::new();
        registry.initialize("map-container", 41.6168, 41.6367);

        registry
            .set_markers("map-container", &[location(1, "Boulevard", 41.65, 41.63)])
            .unwrap();
        registry.set_markers("map-container", &[]).unwrap();

        assert!(registry.markers("map-container").unwrap().is_empty());
    }

    #[test]
    fn clear_removes_markers_but_keeps_map() {
        let registry = MarkerRegistry::new();
        registry.initialize("map-container", 41.6168, 41.6367);
        registry
            .set_markers("map-container", &[location(1, "Boulevard", 41.65, 41.63)])
            .unwrap();

        registry.clear("map-container").unwrap();

        assert!(registry.markers("map-container").unwrap().is_empty());
        assert!(!registry.initialize("map-container", 1.0, 1.0));
    }

    #[test]
    fn unknown_container_reports_not_initialized_without_mutation() {
        let registry = MarkerRegistry::new();

        let result = registry.set_markers("nowhere", &[location(1, "x", 0.0, 0.0)]);
        assert_eq!(
            result,
            Err(MapError::NotInitialized("nowhere".to_string()))
        );
        assert!(registry.clear("nowhere").is_err());
        assert!(registry.markers("nowhere").is_err());
        assert!(registry.info("nowhere").is_err());

        // The failed calls must not have created the container
        assert!(registry.initialize("nowhere", 0.0, 0.0));
    }

    #[test]
    fn non_finite_coordinates_fail_and_keep_previous_markers() {
        let registry = MarkerRegistry::new();
        registry.initialize("map-container", 41.6168, 41.6367);
        registry
            .set_markers("map-container", &[location(1, "Boulevard", 41.65, 41.63)])
            .unwrap();

        let result = registry.set_markers(
            "map-container",
            &[
                location(2, "Old Town", 41.6491, 41.6387),
                location(3, "Broken", f64::NAN, 41.0),
            ],
        );
        assert!(matches!(result, Err(MapError::Render(_))));

        // Retry-safe: the earlier set survives intact
        let markers = registry.markers("map-container").unwrap();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].id, 1);
    }

    #[test]
    fn containers_are_independent() {
        let registry = MarkerRegistry::new();
        registry.initialize("main", 41.6168, 41.6367);
        registry.initialize("detail", 41.5232, 41.5465);

        registry
            .set_markers("main", &[location(1, "Boulevard", 41.65, 41.63)])
            .unwrap();

        assert_eq!(registry.markers("main").unwrap().len(), 1);
        assert!(registry.markers("detail").unwrap().is_empty());
    }
}
