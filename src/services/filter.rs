//! Filter/sort engine for location lists
//!
//! Pure functions over in-memory lists: deterministic, no side effects.
//! Filters compose before sorting; sorting is stable.

use std::collections::HashSet;

use crate::domain::DomainError;
use crate::models::{Category, Location};

/// Visited-filter mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitedFilter {
    #[default]
    All,
    Visited,
    NotVisited,
}

impl VisitedFilter {
    pub fn parse(param: &str) -> Option<VisitedFilter> {
        match param {
            "all" => Some(VisitedFilter::All),
            "visited" => Some(VisitedFilter::Visited),
            "not_visited" => Some(VisitedFilter::NotVisited),
            _ => None,
        }
    }
}

/// Sort key. Category order is lexicographic on the canonical label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    CategoryAsc,
    CategoryDesc,
}

impl SortKey {
    pub fn parse(param: &str) -> Option<SortKey> {
        match param {
            "name_asc" => Some(SortKey::NameAsc),
            "name_desc" => Some(SortKey::NameDesc),
            "category_asc" => Some(SortKey::CategoryAsc),
            "category_desc" => Some(SortKey::CategoryDesc),
            _ => None,
        }
    }
}

/// Filter and sort criteria for one list request
#[derive(Debug, Clone, Default)]
pub struct LocationQuery {
    /// Empty set means no category filter
    pub categories: HashSet<Category>,
    pub visited: VisitedFilter,
    pub sort: SortKey,
}

impl LocationQuery {
    /// Build a query from raw request parameters. Absent parameters fall
    /// back to defaults; unknown values are a validation error.
    pub fn from_params(
        categories: Option<&str>,
        visited: Option<&str>,
        sort: Option<&str>,
    ) -> Result<LocationQuery, DomainError> {
        let categories = match categories {
            Some(raw) => parse_categories(raw)?,
            None => HashSet::new(),
        };

        let visited = match visited {
            Some(raw) => VisitedFilter::parse(raw).ok_or_else(|| {
                DomainError::Validation(format!("Unknown visited filter '{}'", raw))
            })?,
            None => VisitedFilter::default(),
        };

        let sort = match sort {
            Some(raw) => SortKey::parse(raw)
                .ok_or_else(|| DomainError::Validation(format!("Unknown sort key '{}'", raw)))?,
            None => SortKey::default(),
        };

        Ok(LocationQuery {
            categories,
            visited,
            sort,
        })
    }
}

/// Parse a comma-separated list of canonical category labels
pub fn parse_categories(param: &str) -> Result<HashSet<Category>, DomainError> {
    param
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|label| {
            Category::from_label(label)
                .ok_or_else(|| DomainError::Validation(format!("Unknown category '{}'", label)))
        })
        .collect()
}

/// Apply the query to a location list: filter first, then stable-sort the
/// filtered subset.
pub fn filter_and_sort(locations: Vec<Location>, query: &LocationQuery) -> Vec<Location> {
    let mut filtered: Vec<Location> = locations
        .into_iter()
        .filter(|location| {
            query.categories.is_empty() || query.categories.contains(&location.category)
        })
        .filter(|location| match query.visited {
            VisitedFilter::All => true,
            VisitedFilter::Visited => location.visited,
            VisitedFilter::NotVisited => !location.visited,
        })
        .collect();

    match query.sort {
        SortKey::NameAsc => filtered.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::NameDesc => filtered.sort_by(|a, b| b.name.cmp(&a.name)),
        SortKey::CategoryAsc => {
            filtered.sort_by(|a, b| a.category.as_str().cmp(b.category.as_str()))
        }
        SortKey::CategoryDesc => {
            filtered.sort_by(|a, b| b.category.as_str().cmp(a.category.as_str()))
        }
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: i64, name: &str, category: Category, visited: bool) -> Location {
        Location {
            id: Some(id),
            name: name.to_string(),
            description: String::new(),
            category,
            visited,
            latitude: 0.0,
            longitude: 0.0,
            photos: Vec::new(),
            address: None,
            phone: None,
            website: None,
            opening_hours: None,
            external_map_url: None,
            coolness_rating: None,
        }
    }

    fn sample() -> Vec<Location> {
        vec![
            location(1, "Beach A", Category::Beach, false),
            location(2, "Museum B", Category::Museum, true),
        ]
    }

    fn ids(locations: &[Location]) -> Vec<i64> {
        locations.iter().filter_map(|l| l.id).collect()
    }

    #[test]
    fn empty_category_set_is_identity() {
        let query = LocationQuery::default();
        let result = filter_and_sort(sample(), &query);
        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[test]
    fn category_filter_retains_members_only() {
        let query = LocationQuery {
            categories: HashSet::from([Category::Beach]),
            ..Default::default()
        };
        let result = filter_and_sort(sample(), &query);
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn visited_filter_with_category_sort() {
        let query = LocationQuery {
            visited: VisitedFilter::Visited,
            sort: SortKey::CategoryAsc,
            ..Default::default()
        };
        let result = filter_and_sort(sample(), &query);
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn not_visited_filter() {
        let query = LocationQuery {
            visited: VisitedFilter::NotVisited,
            ..Default::default()
        };
        let result = filter_and_sort(sample(), &query);
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn name_desc_reverses_name_asc_without_ties() {
        let locations = vec![
            location(1, "Piazza Square", Category::HistoricalSite, false),
            location(2, "Ali and Nino", Category::Viewpoint, true),
            location(3, "Sarpi Beach", Category::Beach, false),
        ];

        let asc = filter_and_sort(
            locations.clone(),
            &LocationQuery {
                sort: SortKey::NameAsc,
                ..Default::default()
            },
        );
        let desc = filter_and_sort(
            locations,
            &LocationQuery {
                sort: SortKey::NameDesc,
                ..Default::default()
            },
        );

        let mut reversed = ids(&desc);
        reversed.reverse();
        assert_eq!(ids(&asc), reversed);
        assert_eq!(ids(&asc), vec![2, 1, 3]);
    }

    #[test]
    fn category_sort_uses_canonical_label() {
        // HISTORICAL_SITE sorts between ENTERTAINMENT and MUSEUM
        let locations = vec![
            location(1, "a", Category::Museum, false),
            location(2, "b", Category::HistoricalSite, false),
            location(3, "c", Category::Entertainment, false),
        ];
        let result = filter_and_sort(
            locations,
            &LocationQuery {
                sort: SortKey::CategoryAsc,
                ..Default::default()
            },
        );
        assert_eq!(ids(&result), vec![3, 2, 1]);
    }

    #[test]
    fn filters_compose_before_sort() {
        let locations = vec![
            location(1, "Z Park", Category::Park, true),
            location(2, "A Park", Category::Park, false),
            location(3, "M Beach", Category::Beach, false),
            location(4, "B Park", Category::Park, false),
        ];
        let query = LocationQuery {
            categories: HashSet::from([Category::Park]),
            visited: VisitedFilter::NotVisited,
            sort: SortKey::NameAsc,
        };
        let result = filter_and_sort(locations, &query);
        assert_eq!(ids(&result), vec![2, 4]);
    }

    #[test]
    fn parse_categories_accepts_labels_and_whitespace() {
        let set = parse_categories("BEACH, PARK").unwrap();
        assert_eq!(set, HashSet::from([Category::Beach, Category::Park]));
        assert!(parse_categories("").unwrap().is_empty());
    }

    #[test]
    fn parse_categories_rejects_unknown_label() {
        assert!(parse_categories("BEACH,VOLCANO").is_err());
    }

    #[test]
    fn from_params_defaults_and_errors() {
        let query = LocationQuery::from_params(None, None, None).unwrap();
        assert!(query.categories.is_empty());
        assert_eq!(query.visited, VisitedFilter::All);
        assert_eq!(query.sort, SortKey::NameAsc);

        assert!(LocationQuery::from_params(None, Some("sometimes"), None).is_err());
        assert!(LocationQuery::from_params(None, None, Some("rating_asc")).is_err());

        let query =
            LocationQuery::from_params(Some("MUSEUM"), Some("not_visited"), Some("category_desc"))
                .unwrap();
        assert_eq!(query.categories, HashSet::from([Category::Museum]));
        assert_eq!(query.visited, VisitedFilter::NotVisited);
        assert_eq!(query.sort, SortKey::CategoryDesc);
    }
}
