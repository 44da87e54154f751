//! Repository layer for database operations

pub mod amenities;
pub mod bookings;
pub mod images;
pub mod properties;
pub mod reviews;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub properties: properties::PropertiesRepository,
    pub amenities: amenities::AmenitiesRepository,
    pub images: images::ImagesRepository,
    pub bookings: bookings::BookingsRepository,
    pub reviews: reviews::ReviewsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            properties: properties::PropertiesRepository::new(pool.clone()),
            amenities: amenities::AmenitiesRepository::new(pool.clone()),
            images: images::ImagesRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            reviews: reviews::ReviewsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Check database connectivity
    pub async fn ping(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .is_ok()
    }
}

/// True when `err` is a unique constraint violation
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
