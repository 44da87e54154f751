//! Bookings repository for database operations

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, BookingDetails, BookingStatus, NewBooking},
};

const DETAILS_SELECT: &str = r#"
    SELECT b.id, b.property_id, p.title AS property_title, p.owner_id AS property_owner_id,
           b.booker_id, u.email AS booker_email,
           b.start_date, b.end_date, b.total_price, b.status, b.booking_date
    FROM bookings b
    JOIN properties p ON p.id = b.property_id
    JOIN users u ON u.id = b.booker_id
"#;

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get booking by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking with id {} not found", id)))
    }

    /// Get booking with property and booker details
    pub async fn get_details(&self, id: Uuid) -> AppResult<BookingDetails> {
        sqlx::query_as::<_, BookingDetails>(&format!("{} WHERE b.id = $1", DETAILS_SELECT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking with id {} not found", id)))
    }

    /// List all bookings, newest first
    pub async fn list_all(&self) -> AppResult<Vec<BookingDetails>> {
        let rows = sqlx::query_as::<_, BookingDetails>(&format!(
            "{} ORDER BY b.booking_date DESC",
            DETAILS_SELECT
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Bookings made by `user_id` or made on properties `user_id` owns
    pub async fn list_visible_to(&self, user_id: Uuid) -> AppResult<Vec<BookingDetails>> {
        let rows = sqlx::query_as::<_, BookingDetails>(&format!(
            "{} WHERE b.booker_id = $1 OR p.owner_id = $1 ORDER BY b.booking_date DESC",
            DETAILS_SELECT
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Store a new booking
    pub async fn create(&self, booking: &NewBooking) -> AppResult<Booking> {
        let row = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (property_id, booker_id, start_date, end_date, total_price, status, booking_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(booking.property_id)
        .bind(booking.booker_id)
        .bind(booking.start_date)
        .bind(booking.end_date)
        .bind(booking.total_price)
        .bind(booking.status)
        .bind(booking.booking_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update status and/or dates with their recomputed total
    pub async fn update(
        &self,
        id: Uuid,
        status: Option<BookingStatus>,
        dates: Option<(NaiveDate, NaiveDate, Decimal)>,
    ) -> AppResult<Booking> {
        let (start_date, end_date, total_price) = match dates {
            Some((start, end, total)) => (Some(start), Some(end), Some(total)),
            None => (None, None, None),
        };

        sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings SET
                status = COALESCE($2, status),
                start_date = COALESCE($3, start_date),
                end_date = COALESCE($4, end_date),
                total_price = COALESCE($5, total_price)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(start_date)
        .bind(end_date)
        .bind(total_price)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking with id {} not found", id)))
    }

    /// Delete a booking
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Booking with id {} not found", id)));
        }
        Ok(())
    }
}
