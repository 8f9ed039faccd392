//! SeaORM implementation of LocationRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{DomainError, LocationRepository};
use crate::models::location::{ActiveModel, Column, Entity as LocationEntity};
use crate::models::{Category, Location};

/// SeaORM-based implementation of LocationRepository
pub struct SeaOrmLocationRepository {
    db: DatabaseConnection,
}

impl SeaOrmLocationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LocationRepository for SeaOrmLocationRepository {
    async fn find_all(&self) -> Result<Vec<Location>, DomainError> {
        let locations = LocationEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(locations.into_iter().map(Location::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Location>, DomainError> {
        let location = LocationEntity::find_by_id(id).one(&self.db).await?;

        Ok(location.map(Location::from))
    }

    async fn find_by_category(&self, category: Category) -> Result<Vec<Location>, DomainError> {
        let locations = LocationEntity::find()
            .filter(Column::Category.eq(category))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(locations.into_iter().map(Location::from).collect())
    }

    async fn find_by_visited(&self, visited: bool) -> Result<Vec<Location>, DomainError> {
        let locations = LocationEntity::find()
            .filter(Column::Visited.eq(visited))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(locations.into_iter().map(Location::from).collect())
    }

    async fn save(&self, location: Location) -> Result<Location, DomainError> {
        let now = chrono::Utc::now().to_rfc3339();

        match location.id {
            Some(id) => {
                LocationEntity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or(DomainError::NotFound)?;

                let mut active = ActiveModel::from(location);
                active.id = Set(id);
                active.updated_at = Set(now);

                let model = active.update(&self.db).await?;
                Ok(Location::from(model))
            }
            None => {
                let mut active = ActiveModel::from(location);
                active.created_at = Set(now.clone());
                active.updated_at = Set(now);

                let model = active.insert(&self.db).await?;
                Ok(Location::from(model))
            }
        }
    }
}
