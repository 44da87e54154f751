//! Property images repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::image::{CreateImage, Image, UpdateImage},
};

#[derive(Clone)]
pub struct ImagesRepository {
    pool: Pool<Postgres>,
}

impl ImagesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get image by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Image> {
        sqlx::query_as::<_, Image>("SELECT * FROM images WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Image with id {} not found", id)))
    }

    /// Images of a property in display order
    pub async fn list_for_property(&self, property_id: Uuid) -> AppResult<Vec<Image>> {
        let rows = sqlx::query_as::<_, Image>(
            "SELECT * FROM images WHERE property_id = $1 ORDER BY display_order, id",
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Attach an image to a property
    pub async fn create(&self, property_id: Uuid, data: &CreateImage) -> AppResult<Image> {
        let row = sqlx::query_as::<_, Image>(
            r#"
            INSERT INTO images (property_id, image_url, alt_text, display_order)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(property_id)
        .bind(&data.image_url)
        .bind(&data.alt_text)
        .bind(data.display_order.unwrap_or(0))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an image; unset fields keep their value
    pub async fn update(&self, id: Uuid, data: &UpdateImage) -> AppResult<Image> {
        sqlx::query_as::<_, Image>(
            r#"
            UPDATE images SET
                image_url = COALESCE($2, image_url),
                alt_text = COALESCE($3, alt_text),
                display_order = COALESCE($4, display_order)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.image_url)
        .bind(&data.alt_text)
        .bind(data.display_order)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Image with id {} not found", id)))
    }

    /// Delete an image
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM images WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Image with id {} not found", id)));
        }
        Ok(())
    }
}
