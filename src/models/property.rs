//! Property (listing) model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Rentable property
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Property {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Price charged per booked day
    #[schema(value_type = String, example = "120.00")]
    pub price_per_day: Decimal,
    pub address: String,
    pub city: String,
    pub state_or_province: String,
    pub country: String,
    pub zip_code: Option<String>,
    pub is_available: bool,
    pub date_added: DateTime<Utc>,
    pub property_type_id: Uuid,
    pub owner_id: Uuid,
    pub reference_id: Option<String>,
}

/// Property summary for listings
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct PropertyShort {
    pub id: Uuid,
    pub title: String,
    #[schema(value_type = String)]
    pub price_per_day: Decimal,
    pub city: String,
    pub country: String,
    pub is_available: bool,
    pub property_type_name: Option<String>,
    pub owner_name: Option<String>,
    /// Url of the first image by display order
    pub image_url: Option<String>,
}

/// Property list query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PropertyQuery {
    pub city: Option<String>,
    pub country: Option<String>,
    pub property_type_id: Option<Uuid>,
    pub owner_id: Option<Uuid>,
    pub available: Option<bool>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Highest page number a property search accepts
pub const MAX_PAGE: i64 = 1_000_000;

impl PropertyQuery {
    /// Page (from 1) and page size (1 to 100) with defaults applied
    pub fn pagination(&self) -> AppResult<(i64, i64)> {
        let page = self.page.unwrap_or(1).max(1);
        if page > MAX_PAGE {
            return Err(AppError::BadRequest(format!(
                "Page must be at most {}",
                MAX_PAGE
            )));
        }
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        Ok((page, per_page))
    }
}

/// Create property request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProperty {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
    #[schema(value_type = String)]
    pub price_per_day: Decimal,
    #[validate(length(min = 1, max = 255))]
    pub address: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(min = 1, max = 100))]
    pub state_or_province: String,
    #[validate(length(min = 1, max = 100))]
    pub country: String,
    #[validate(length(max = 20))]
    pub zip_code: Option<String>,
    pub is_available: Option<bool>,
    pub property_type_id: Uuid,
    /// Listing owner; only admins may list on behalf of someone else
    pub owner_id: Option<Uuid>,
    #[validate(length(max = 50))]
    pub reference_id: Option<String>,
}

/// Update property request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProperty {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 1000))]
    pub description: Option<String>,
    #[schema(value_type = Option<String>)]
    pub price_per_day: Option<Decimal>,
    #[validate(length(min = 1, max = 255))]
    pub address: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub state_or_province: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub country: Option<String>,
    #[validate(length(max = 20))]
    pub zip_code: Option<String>,
    pub is_available: Option<bool>,
    pub property_type_id: Option<Uuid>,
    #[validate(length(max = 50))]
    pub reference_id: Option<String>,
}

/// Largest amount a `NUMERIC(18, 2)` money column holds
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_874_919_423, 2_328_306, 0, false, 2);

/// Day rates must be at least one cent and fit `NUMERIC(18, 2)`
pub fn check_day_rate(price: Decimal) -> AppResult<Decimal> {
    let min = Decimal::new(1, 2);
    let max = MAX_AMOUNT;

    if price < min {
        return Err(AppError::Validation("Price per day must be positive".to_string()));
    }
    if price > max || price.normalize().scale() > 2 {
        return Err(AppError::Validation(
            "Price per day must have at most 2 decimals and 16 integer digits".to_string(),
        ));
    }

    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_day_rate() {
        assert!(check_day_rate(Decimal::new(12050, 2)).is_ok());
        assert!(check_day_rate(Decimal::new(1, 2)).is_ok());
        // 10.500 normalizes to 10.5
        assert!(check_day_rate(Decimal::new(10500, 3)).is_ok());
        assert!(check_day_rate(Decimal::ZERO).is_err());
        assert!(check_day_rate(Decimal::new(-500, 2)).is_err());
        assert!(check_day_rate(Decimal::new(10005, 3)).is_err());
    }

    #[test]
    fn test_max_amount() {
        assert_eq!(MAX_AMOUNT, Decimal::new(9_999_999_999_999_999, 2));
    }

    fn query(page: Option<i64>, per_page: Option<i64>) -> PropertyQuery {
        PropertyQuery {
            city: None,
            country: None,
            property_type_id: None,
            owner_id: None,
            available: None,
            page,
            per_page,
        }
    }

    #[test]
    fn test_pagination_defaults_and_clamps() {
        assert_eq!(query(None, None).pagination().unwrap(), (1, 20));
        assert_eq!(query(Some(-3), Some(0)).pagination().unwrap(), (1, 1));
        assert_eq!(query(Some(7), Some(500)).pagination().unwrap(), (7, 100));
        assert_eq!(query(Some(MAX_PAGE), Some(100)).pagination().unwrap(), (MAX_PAGE, 100));
    }

    #[test]
    fn test_pagination_rejects_huge_page() {
        assert!(matches!(
            query(Some(i64::MAX), Some(100)).pagination(),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            query(Some(MAX_PAGE + 1), None).pagination(),
            Err(AppError::BadRequest(_))
        ));
    }
}
