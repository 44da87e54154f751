//! Review service

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        review::{CreateReview, Review, UpdateReview},
        user::UserClaims,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct ReviewsService {
    repository: Repository,
}

impl ReviewsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Review>> {
        self.repository.reviews.list().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Review> {
        self.repository.reviews.get_by_id(id).await
    }

    /// Reviews of one property, newest first
    pub async fn list_for_property(&self, property_id: Uuid) -> AppResult<Vec<Review>> {
        self.repository.properties.get_by_id(property_id).await?;
        self.repository.reviews.list_for_property(property_id).await
    }

    /// Post a review as the current user
    pub async fn create(&self, reviewer_id: Uuid, data: &CreateReview) -> AppResult<Review> {
        data.validate()?;
        self.repository.properties.get_by_id(data.property_id).await?;

        let review = self.repository.reviews.create(reviewer_id, data).await?;
        tracing::info!(
            "Review {} ({} stars) posted on property {} by user {}",
            review.id,
            review.rating,
            review.property_id,
            reviewer_id
        );
        Ok(review)
    }

    /// Edit a review (author or admin)
    pub async fn update(&self, claims: &UserClaims, id: Uuid, data: &UpdateReview) -> AppResult<Review> {
        data.validate()?;
        let review = self.repository.reviews.get_by_id(id).await?;
        claims.require_self_or_admin(review.reviewer_id)?;
        self.repository.reviews.update(id, data).await
    }

    /// Delete a review (author or admin)
    pub async fn delete(&self, claims: &UserClaims, id: Uuid) -> AppResult<()> {
        let review = self.repository.reviews.get_by_id(id).await?;
        claims.require_self_or_admin(review.reviewer_id)?;
        self.repository.reviews.delete(id).await
    }
}
