//! Properties repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::property::{CreateProperty, Property, PropertyQuery, PropertyShort, UpdateProperty},
};

#[derive(Clone)]
pub struct PropertiesRepository {
    pool: Pool<Postgres>,
}

impl PropertiesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get property by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Property> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Property with id {} not found", id)))
    }

    /// Search properties with pagination
    pub async fn search(&self, query: &PropertyQuery) -> AppResult<(Vec<PropertyShort>, i64)> {
        let (page, per_page) = query.pagination()?;
        let offset = (page - 1) * per_page;

        // Unset filters are passed as NULL and match everything
        let filter = r#"
            ($1::text IS NULL OR p.city ILIKE $1)
            AND ($2::text IS NULL OR p.country ILIKE $2)
            AND ($3::uuid IS NULL OR p.property_type_id = $3)
            AND ($4::uuid IS NULL OR p.owner_id = $4)
            AND ($5::boolean IS NULL OR p.is_available = $5)
        "#;

        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM properties p WHERE {}",
            filter
        ))
        .bind(&query.city)
        .bind(&query.country)
        .bind(query.property_type_id)
        .bind(query.owner_id)
        .bind(query.available)
        .fetch_one(&self.pool)
        .await?;

        let properties = sqlx::query_as::<_, PropertyShort>(&format!(
            r#"
            SELECT p.id, p.title, p.price_per_day, p.city, p.country, p.is_available,
                   pt.name AS property_type_name,
                   u.first_name || ' ' || u.last_name AS owner_name,
                   (SELECT i.image_url FROM images i
                    WHERE i.property_id = p.id
                    ORDER BY i.display_order, i.id
                    LIMIT 1) AS image_url
            FROM properties p
            LEFT JOIN property_types pt ON pt.id = p.property_type_id
            LEFT JOIN users u ON u.id = p.owner_id
            WHERE {}
            ORDER BY p.date_added DESC
            LIMIT $6 OFFSET $7
            "#,
            filter
        ))
        .bind(&query.city)
        .bind(&query.country)
        .bind(query.property_type_id)
        .bind(query.owner_id)
        .bind(query.available)
        .bind(per_page)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((properties, total))
    }

    /// Create a property owned by `owner_id`
    pub async fn create(&self, data: &CreateProperty, owner_id: Uuid) -> AppResult<Property> {
        let property = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                title, description, price_per_day, address, city, state_or_province,
                country, zip_code, is_available, date_added, property_type_id, owner_id, reference_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.price_per_day)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.state_or_province)
        .bind(&data.country)
        .bind(&data.zip_code)
        .bind(data.is_available.unwrap_or(true))
        .bind(Utc::now())
        .bind(data.property_type_id)
        .bind(owner_id)
        .bind(&data.reference_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| unknown_property_type(e, data.property_type_id))?;

        Ok(property)
    }

    /// Update a property; only provided fields change
    pub async fn update(&self, id: Uuid, data: &UpdateProperty) -> AppResult<Property> {
        // $1 is the property id
        let mut sets: Vec<String> = Vec::new();

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, sets.len() + 2));
                }
            };
        }

        add_field!(data.title, "title");
        add_field!(data.description, "description");
        add_field!(data.price_per_day, "price_per_day");
        add_field!(data.address, "address");
        add_field!(data.city, "city");
        add_field!(data.state_or_province, "state_or_province");
        add_field!(data.country, "country");
        add_field!(data.zip_code, "zip_code");
        add_field!(data.is_available, "is_available");
        add_field!(data.property_type_id, "property_type_id");
        add_field!(data.reference_id, "reference_id");

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        let query = format!(
            "UPDATE properties SET {} WHERE id = $1 RETURNING *",
            sets.join(", ")
        );

        let mut builder = sqlx::query_as::<_, Property>(&query).bind(id);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.title);
        bind_field!(data.description);
        bind_field!(data.price_per_day);
        bind_field!(data.address);
        bind_field!(data.city);
        bind_field!(data.state_or_province);
        bind_field!(data.country);
        bind_field!(data.zip_code);
        bind_field!(data.is_available);
        bind_field!(data.property_type_id);
        bind_field!(data.reference_id);

        builder
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| match data.property_type_id {
                Some(type_id) => unknown_property_type(e, type_id),
                None => AppError::Database(e),
            })?
            .ok_or_else(|| AppError::NotFound(format!("Property with id {} not found", id)))
    }

    /// Delete a property (images, amenities, bookings and reviews cascade)
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Property with id {} not found", id)));
        }
        Ok(())
    }
}

/// Map a foreign key violation on `property_type_id` to a not found error
fn unknown_property_type(err: sqlx::Error, type_id: Uuid) -> AppError {
    match err {
        sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
            AppError::NotFound(format!("Property type with id {} not found", type_id))
        }
        other => AppError::Database(other),
    }
}
