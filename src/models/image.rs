//! Property image model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Image attached to a property
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Image {
    pub id: Uuid,
    pub property_id: Uuid,
    /// Url or path of the image file
    pub image_url: String,
    pub alt_text: Option<String>,
    /// Lower values are shown first
    pub display_order: i32,
}

/// Create image request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateImage {
    #[validate(length(min = 1, max = 500))]
    pub image_url: String,
    #[validate(length(max = 255))]
    pub alt_text: Option<String>,
    pub display_order: Option<i32>,
}

/// Update image request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateImage {
    #[validate(length(min = 1, max = 500))]
    pub image_url: Option<String>,
    #[validate(length(max = 255))]
    pub alt_text: Option<String>,
    pub display_order: Option<i32>,
}
