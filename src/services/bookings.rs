//! Booking service

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{
            Booking, BookingDetails, BookingStatus, CreateBooking, NewBooking, QuoteQuery,
            UpdateBooking,
        },
        property::{Property, MAX_AMOUNT},
        user::UserClaims,
    },
    pricing::{self, BookingQuote},
    repository::Repository,
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
}

impl BookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Price a stay without booking it; dates default to today and tomorrow
    pub async fn quote(&self, query: &QuoteQuery) -> AppResult<BookingQuote> {
        let today = Utc::now().date_naive();
        let start = query.start_date.or(Some(today));
        let end = query.end_date.or(Some(today + Duration::days(1)));

        // Reject bad ranges before touching the store
        pricing::validate_range(start, end)?;

        let property = self.repository.properties.get_by_id(query.property_id).await?;
        Ok(pricing::quote(property.price_per_day, start, end)?)
    }

    /// Create a pending booking for the current user
    pub async fn create(&self, booker_id: Uuid, request: &CreateBooking) -> AppResult<Booking> {
        let (start, end) = pricing::validate_range(request.start_date, request.end_date)?;

        let property = self.repository.properties.get_by_id(request.property_id).await?;
        let booking = prepare_booking(&property, booker_id, start, end, Utc::now())?;
        let booking = self.repository.bookings.create(&booking).await?;

        tracing::info!(
            "Booking {} created for property {} by user {} ({} days, total {})",
            booking.id,
            booking.property_id,
            booker_id,
            pricing::inclusive_day_count(booking.start_date, booking.end_date),
            booking.total_price
        );

        Ok(booking)
    }

    /// Bookings the caller may see: all for admins, otherwise own and on owned properties
    pub async fn list(&self, claims: &UserClaims) -> AppResult<Vec<BookingDetails>> {
        if claims.is_admin() {
            self.repository.bookings.list_all().await
        } else {
            self.repository.bookings.list_visible_to(claims.user_id).await
        }
    }

    /// Get booking details (booker, property owner or admin)
    pub async fn get(&self, claims: &UserClaims, id: Uuid) -> AppResult<BookingDetails> {
        let booking = self.repository.bookings.get_details(id).await?;

        if booking.booker_id != claims.user_id {
            claims.require_self_or_admin(booking.property_owner_id)?;
        }

        Ok(booking)
    }

    /// Update status and/or dates (property owner or admin)
    ///
    /// Changing dates re-prices the booking at the property's current rate.
    pub async fn update(
        &self,
        claims: &UserClaims,
        id: Uuid,
        request: &UpdateBooking,
    ) -> AppResult<Booking> {
        let booking = self.repository.bookings.get_by_id(id).await?;
        let property = self.repository.properties.get_by_id(booking.property_id).await?;
        claims.require_self_or_admin(property.owner_id)?;

        let dates = if request.start_date.is_some() || request.end_date.is_some() {
            let quote = pricing::quote(
                property.price_per_day,
                request.start_date.or(Some(booking.start_date)),
                request.end_date.or(Some(booking.end_date)),
            )?;
            check_total(quote.total_price)?;
            Some((quote.start_date, quote.end_date, quote.total_price))
        } else {
            None
        };

        let updated = self.repository.bookings.update(id, request.status, dates).await?;

        if updated.status != booking.status {
            tracing::info!(
                "Booking {} status changed from {} to {}",
                id,
                booking.status,
                updated.status
            );
        }

        Ok(updated)
    }

    /// Delete a booking (booker or admin)
    pub async fn delete(&self, claims: &UserClaims, id: Uuid) -> AppResult<()> {
        let booking = self.repository.bookings.get_by_id(id).await?;
        claims.require_self_or_admin(booking.booker_id)?;
        self.repository.bookings.delete(id).await
    }
}

/// Price a validated range against `property` and build the pending booking
pub fn prepare_booking(
    property: &Property,
    booker_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
    now: DateTime<Utc>,
) -> AppResult<NewBooking> {
    let quote = pricing::quote(property.price_per_day, Some(start), Some(end))?;
    check_total(quote.total_price)?;

    Ok(NewBooking {
        property_id: property.id,
        booker_id,
        start_date: quote.start_date,
        end_date: quote.end_date,
        total_price: quote.total_price,
        status: BookingStatus::Pending,
        booking_date: now,
    })
}

/// Totals must fit the booking's `NUMERIC(18, 2)` column
fn check_total(total: Decimal) -> AppResult<()> {
    if total > MAX_AMOUNT {
        return Err(AppError::Validation(format!(
            "Booking total {} exceeds the maximum of {}",
            total, MAX_AMOUNT
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(rate: &str) -> Property {
        Property {
            id: Uuid::new_v4(),
            title: "Seaside cottage".to_string(),
            description: "Two bedrooms".to_string(),
            price_per_day: rate.parse().unwrap(),
            address: "1 Harbour Road".to_string(),
            city: "Brighton".to_string(),
            state_or_province: "East Sussex".to_string(),
            country: "UK".to_string(),
            zip_code: None,
            is_available: true,
            date_added: Utc::now(),
            property_type_id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            reference_id: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_prepare_booking_is_pending_and_priced() {
        let property = property("50.00");
        let booker = Uuid::new_v4();
        let now = Utc::now();

        let booking =
            prepare_booking(&property, booker, date(2024, 1, 1), date(2024, 1, 3), now).unwrap();

        assert_eq!(booking.property_id, property.id);
        assert_eq!(booking.booker_id, booker);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.total_price, Decimal::new(15000, 2));
        assert_eq!(booking.booking_date, now);
    }

    #[test]
    fn test_prepare_booking_rejects_inverted_range() {
        let result = prepare_booking(
            &property("75.25"),
            Uuid::new_v4(),
            date(2024, 3, 10),
            date(2024, 3, 9),
            Utc::now(),
        );
        assert!(matches!(result, Err(AppError::InvalidRange(_))));
    }

    #[test]
    fn test_prepare_booking_same_day() {
        let booking = prepare_booking(
            &property("100.00"),
            Uuid::new_v4(),
            date(2024, 1, 1),
            date(2024, 1, 1),
            Utc::now(),
        )
        .unwrap();
        assert_eq!(booking.total_price, Decimal::new(10000, 2));
    }

    #[test]
    fn test_prepare_booking_rejects_total_beyond_column() {
        let result = prepare_booking(
            &property("9999999999999999.99"),
            Uuid::new_v4(),
            date(2024, 1, 1),
            date(2024, 1, 2),
            Utc::now(),
        );
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_prepare_booking_accepts_total_at_column_limit() {
        let booking = prepare_booking(
            &property("9999999999999999.99"),
            Uuid::new_v4(),
            date(2024, 1, 1),
            date(2024, 1, 1),
            Utc::now(),
        )
        .unwrap();
        assert_eq!(booking.total_price, MAX_AMOUNT);
    }
}
