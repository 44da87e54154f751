//! Reviews repository

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::review::{CreateReview, Review, UpdateReview},
};

#[derive(Clone)]
pub struct ReviewsRepository {
    pool: Pool<Postgres>,
}

impl ReviewsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get review by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Review> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Review with id {} not found", id)))
    }

    /// List all reviews, newest first
    pub async fn list(&self) -> AppResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY review_date DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Reviews of a property, newest first
    pub async fn list_for_property(&self, property_id: Uuid) -> AppResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, Review>(
            "SELECT * FROM reviews WHERE property_id = $1 ORDER BY review_date DESC",
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a review written by `reviewer_id`
    pub async fn create(&self, reviewer_id: Uuid, data: &CreateReview) -> AppResult<Review> {
        let row = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (property_id, reviewer_id, rating, comment, review_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(data.property_id)
        .bind(reviewer_id)
        .bind(data.rating)
        .bind(&data.comment)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a review; unset fields keep their value
    pub async fn update(&self, id: Uuid, data: &UpdateReview) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            r#"
            UPDATE reviews SET
                rating = COALESCE($2, rating),
                comment = COALESCE($3, comment)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.rating)
        .bind(&data.comment)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Review with id {} not found", id)))
    }

    /// Delete a review
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Review with id {} not found", id)));
        }
        Ok(())
    }
}
