//! Reference data service (property types and amenities)

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::amenity::{Amenity, CreateAmenity, CreatePropertyType, PropertyType},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_property_types(&self) -> AppResult<Vec<PropertyType>> {
        self.repository.amenities.list_types().await
    }

    pub async fn create_property_type(&self, data: &CreatePropertyType) -> AppResult<PropertyType> {
        data.validate()?;
        let property_type = self.repository.amenities.create_type(data).await?;
        tracing::info!("Property type '{}' created", property_type.name);
        Ok(property_type)
    }

    /// Delete a property type; fails with a conflict while properties still use it
    pub async fn delete_property_type(&self, id: Uuid) -> AppResult<()> {
        self.repository.amenities.delete_type(id).await
    }

    pub async fn list_amenities(&self) -> AppResult<Vec<Amenity>> {
        self.repository.amenities.list().await
    }

    pub async fn create_amenity(&self, data: &CreateAmenity) -> AppResult<Amenity> {
        data.validate()?;
        let amenity = self.repository.amenities.create(data).await?;
        tracing::info!("Amenity '{}' created", amenity.name);
        Ok(amenity)
    }
}
