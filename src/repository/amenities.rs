//! Amenities and property types repository

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::amenity::{Amenity, CreateAmenity, CreatePropertyType, PropertyAmenity, PropertyType},
};

#[derive(Clone)]
pub struct AmenitiesRepository {
    pool: Pool<Postgres>,
}

impl AmenitiesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    // ---- Amenities ----

    /// List all amenities
    pub async fn list(&self) -> AppResult<Vec<Amenity>> {
        let rows = sqlx::query_as::<_, Amenity>("SELECT * FROM amenities ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create an amenity
    pub async fn create(&self, data: &CreateAmenity) -> AppResult<Amenity> {
        let row = sqlx::query_as::<_, Amenity>(
            "INSERT INTO amenities (name, description) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Amenities attached to a property
    pub async fn list_for_property(&self, property_id: Uuid) -> AppResult<Vec<PropertyAmenity>> {
        let rows = sqlx::query_as::<_, PropertyAmenity>(
            r#"
            SELECT pa.id, pa.property_id, pa.amenity_id, a.name, a.description, pa.date_added
            FROM property_amenities pa
            JOIN amenities a ON a.id = pa.amenity_id
            WHERE pa.property_id = $1
            ORDER BY a.name
            "#,
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Attach an amenity to a property
    pub async fn attach(&self, property_id: Uuid, amenity_id: Uuid) -> AppResult<PropertyAmenity> {
        let row = sqlx::query_as::<_, PropertyAmenity>(
            r#"
            WITH inserted AS (
                INSERT INTO property_amenities (property_id, amenity_id, date_added)
                VALUES ($1, $2, $3)
                RETURNING *
            )
            SELECT i.id, i.property_id, i.amenity_id, a.name, a.description, i.date_added
            FROM inserted i
            JOIN amenities a ON a.id = i.amenity_id
            "#,
        )
        .bind(property_id)
        .bind(amenity_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict("Amenity already attached to this property".to_string())
            }
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                AppError::NotFound(format!("Amenity with id {} not found", amenity_id))
            }
            other => AppError::Database(other),
        })?;
        Ok(row)
    }

    /// Detach an amenity from a property
    pub async fn detach(&self, property_id: Uuid, amenity_id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            "DELETE FROM property_amenities WHERE property_id = $1 AND amenity_id = $2",
        )
        .bind(property_id)
        .bind(amenity_id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Amenity is not attached to this property".to_string()));
        }
        Ok(())
    }

    // ---- Property types ----

    /// List all property types
    pub async fn list_types(&self) -> AppResult<Vec<PropertyType>> {
        let rows = sqlx::query_as::<_, PropertyType>("SELECT * FROM property_types ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create a property type
    pub async fn create_type(&self, data: &CreatePropertyType) -> AppResult<PropertyType> {
        let row = sqlx::query_as::<_, PropertyType>(
            "INSERT INTO property_types (name, description) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a property type that no property uses
    pub async fn delete_type(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM property_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                    AppError::Conflict("Property type is still used by properties".to_string())
                }
                other => AppError::Database(other),
            })?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Property type {} not found", id)));
        }
        Ok(())
    }
}
