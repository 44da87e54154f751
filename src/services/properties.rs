//! Property catalog service (listings, their images and amenities)

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        amenity::PropertyAmenity,
        image::{CreateImage, Image, UpdateImage},
        property::{
            check_day_rate, CreateProperty, Property, PropertyQuery, PropertyShort, UpdateProperty,
        },
        user::UserClaims,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct PropertiesService {
    repository: Repository,
}

impl PropertiesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Search properties
    pub async fn search(&self, query: &PropertyQuery) -> AppResult<(Vec<PropertyShort>, i64)> {
        self.repository.properties.search(query).await
    }

    /// Get property by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Property> {
        self.repository.properties.get_by_id(id).await
    }

    /// Create a listing; the caller owns it unless an admin names another owner
    pub async fn create(&self, claims: &UserClaims, data: &CreateProperty) -> AppResult<Property> {
        data.validate()?;
        check_day_rate(data.price_per_day)?;

        let owner_id = match data.owner_id {
            Some(owner_id) if owner_id != claims.user_id => {
                claims.require_admin()?;
                self.repository.users.get_by_id(owner_id).await?;
                owner_id
            }
            _ => claims.user_id,
        };

        let property = self.repository.properties.create(data, owner_id).await?;
        tracing::info!("Property {} listed by user {}", property.id, owner_id);
        Ok(property)
    }

    /// Update a listing (owner or admin)
    pub async fn update(&self, claims: &UserClaims, id: Uuid, data: &UpdateProperty) -> AppResult<Property> {
        data.validate()?;
        if let Some(price) = data.price_per_day {
            check_day_rate(price)?;
        }

        self.require_owner(claims, id).await?;
        self.repository.properties.update(id, data).await
    }

    /// Delete a listing (owner or admin)
    pub async fn delete(&self, claims: &UserClaims, id: Uuid) -> AppResult<()> {
        self.require_owner(claims, id).await?;
        self.repository.properties.delete(id).await?;
        tracing::info!("Property {} deleted by user {}", id, claims.user_id);
        Ok(())
    }

    /// Fail unless the caller owns property `id` or is an admin
    async fn require_owner(&self, claims: &UserClaims, id: Uuid) -> AppResult<Property> {
        let property = self.repository.properties.get_by_id(id).await?;
        claims.require_self_or_admin(property.owner_id)?;
        Ok(property)
    }

    // ---- Images ----

    pub async fn list_images(&self, property_id: Uuid) -> AppResult<Vec<Image>> {
        self.repository.properties.get_by_id(property_id).await?;
        self.repository.images.list_for_property(property_id).await
    }

    pub async fn add_image(&self, claims: &UserClaims, property_id: Uuid, data: &CreateImage) -> AppResult<Image> {
        data.validate()?;
        self.require_owner(claims, property_id).await?;
        self.repository.images.create(property_id, data).await
    }

    pub async fn update_image(&self, claims: &UserClaims, id: Uuid, data: &UpdateImage) -> AppResult<Image> {
        data.validate()?;
        let image = self.repository.images.get_by_id(id).await?;
        self.require_owner(claims, image.property_id).await?;
        self.repository.images.update(id, data).await
    }

    pub async fn delete_image(&self, claims: &UserClaims, id: Uuid) -> AppResult<()> {
        let image = self.repository.images.get_by_id(id).await?;
        self.require_owner(claims, image.property_id).await?;
        self.repository.images.delete(id).await
    }

    // ---- Amenities ----

    pub async fn list_amenities(&self, property_id: Uuid) -> AppResult<Vec<PropertyAmenity>> {
        self.repository.properties.get_by_id(property_id).await?;
        self.repository.amenities.list_for_property(property_id).await
    }

    pub async fn attach_amenity(
        &self,
        claims: &UserClaims,
        property_id: Uuid,
        amenity_id: Uuid,
    ) -> AppResult<PropertyAmenity> {
        self.require_owner(claims, property_id).await?;
        self.repository.amenities.attach(property_id, amenity_id).await
    }

    pub async fn detach_amenity(&self, claims: &UserClaims, property_id: Uuid, amenity_id: Uuid) -> AppResult<()> {
        self.require_owner(claims, property_id).await?;
        self.repository.amenities.detach(property_id, amenity_id).await
    }
}
