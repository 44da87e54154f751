//! Amenities and property types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Property feature or facility (e.g. "WiFi", "Parking")
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Amenity {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

/// Amenity as attached to a property
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct PropertyAmenity {
    pub id: Uuid,
    pub property_id: Uuid,
    pub amenity_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub date_added: DateTime<Utc>,
}

/// Create amenity request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAmenity {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

/// Attach amenity request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AttachAmenity {
    pub amenity_id: Uuid,
}

/// Category of rentable item (e.g. "Apartment", "House")
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PropertyType {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

/// Create property type request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePropertyType {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}
