//! Review model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Property review
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Review {
    pub id: Uuid,
    pub property_id: Uuid,
    pub reviewer_id: Uuid,
    /// Star rating, 1 to 5
    pub rating: i16,
    pub comment: Option<String>,
    pub review_date: DateTime<Utc>,
}

/// Create review request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReview {
    pub property_id: Uuid,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i16,
    #[validate(length(max = 1000))]
    pub comment: Option<String>,
}

/// Update review request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateReview {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i16>,
    #[validate(length(max = 1000))]
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        let review = |rating| CreateReview {
            property_id: Uuid::new_v4(),
            rating,
            comment: None,
        };
        assert!(review(1).validate().is_ok());
        assert!(review(5).validate().is_ok());
        assert!(review(0).validate().is_err());
        assert!(review(6).validate().is_err());

        let update = UpdateReview { rating: Some(9), comment: None };
        assert!(update.validate().is_err());
        let update = UpdateReview { rating: None, comment: Some("Lovely".to_string()) };
        assert!(update.validate().is_ok());
    }
}
