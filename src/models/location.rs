use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed classification of a location. Persisted by its canonical label.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    #[sea_orm(string_value = "RESTAURANT")]
    Restaurant,
    #[sea_orm(string_value = "HISTORICAL_SITE")]
    HistoricalSite,
    #[sea_orm(string_value = "PARK")]
    Park,
    #[sea_orm(string_value = "BEACH")]
    Beach,
    #[sea_orm(string_value = "CAFE")]
    Cafe,
    #[sea_orm(string_value = "MUSEUM")]
    Museum,
    #[sea_orm(string_value = "VIEWPOINT")]
    Viewpoint,
    #[sea_orm(string_value = "SHOPPING")]
    Shopping,
    #[sea_orm(string_value = "ENTERTAINMENT")]
    Entertainment,
}

impl Category {
    /// Canonical label, also the storage and wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Restaurant => "RESTAURANT",
            Category::HistoricalSite => "HISTORICAL_SITE",
            Category::Park => "PARK",
            Category::Beach => "BEACH",
            Category::Cafe => "CAFE",
            Category::Museum => "MUSEUM",
            Category::Viewpoint => "VIEWPOINT",
            Category::Shopping => "SHOPPING",
            Category::Entertainment => "ENTERTAINMENT",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        match label {
            "RESTAURANT" => Some(Category::Restaurant),
            "HISTORICAL_SITE" => Some(Category::HistoricalSite),
            "PARK" => Some(Category::Park),
            "BEACH" => Some(Category::Beach),
            "CAFE" => Some(Category::Cafe),
            "MUSEUM" => Some(Category::Museum),
            "VIEWPOINT" => Some(Category::Viewpoint),
            "SHOPPING" => Some(Category::Shopping),
            "ENTERTAINMENT" => Some(Category::Entertainment),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How worthwhile a location is to visit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoolnessRating {
    #[sea_orm(string_value = "MUST_SEE")]
    MustSee,
    #[sea_orm(string_value = "COOL")]
    Cool,
    #[sea_orm(string_value = "JUST_OK")]
    JustOk,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub visited: bool,
    pub latitude: f64,
    pub longitude: f64,
    pub photos: Option<String>, // JSON array
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub opening_hours: Option<String>,
    pub external_map_url: Option<String>,
    pub coolness_rating: Option<CoolnessRating>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// DTO for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub visited: bool,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_map_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coolness_rating: Option<CoolnessRating>,
}

impl From<Model> for Location {
    fn from(model: Model) -> Self {
        let photos: Vec<String> = model
            .photos
            .map(|s| serde_json::from_str(&s).unwrap_or_default())
            .unwrap_or_default();

        Self {
            id: Some(model.id),
            name: model.name,
            description: model.description,
            category: model.category,
            visited: model.visited,
            latitude: model.latitude,
            longitude: model.longitude,
            photos,
            address: model.address,
            phone: model.phone,
            website: model.website,
            opening_hours: model.opening_hours,
            external_map_url: model.external_map_url,
            coolness_rating: model.coolness_rating,
        }
    }
}

impl From<Location> for ActiveModel {
    fn from(location: Location) -> Self {
        let photos = if location.photos.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&location.photos).unwrap_or_default())
        };

        Self {
            id: location.id.map_or(NotSet, Set),
            name: Set(location.name),
            description: Set(location.description),
            category: Set(location.category),
            visited: Set(location.visited),
            latitude: Set(location.latitude),
            longitude: Set(location.longitude),
            photos: Set(photos),
            address: Set(location.address),
            phone: Set(location.phone),
            website: Set(location.website),
            opening_hours: Set(location.opening_hours),
            external_map_url: Set(location.external_map_url),
            coolness_rating: Set(location.coolness_rating),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}
