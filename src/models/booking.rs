//! Booking model and related types

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgTypeInfo, Decode, Encode, FromRow, Postgres};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Booking status
///
/// Set directly by callers; there is no enforced transition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            "completed" => Ok(BookingStatus::Completed),
            _ => Err(format!("Invalid booking status: {}", s)),
        }
    }
}

// SQLx conversion for BookingStatus (stored as TEXT)
impl sqlx::Type<Postgres> for BookingStatus {
    fn type_info() -> PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as sqlx::Type<Postgres>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Postgres> for BookingStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for BookingStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        <&str as Encode<Postgres>>::encode(self.as_str(), buf)
    }
}

/// Booking record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: Uuid,
    pub property_id: Uuid,
    pub booker_id: Uuid,
    /// First booked day (inclusive)
    pub start_date: NaiveDate,
    /// Last booked day (inclusive)
    pub end_date: NaiveDate,
    #[schema(value_type = String, example = "150.00")]
    pub total_price: Decimal,
    pub status: BookingStatus,
    /// When the booking was made (UTC)
    pub booking_date: DateTime<Utc>,
}

/// Booking with property and booker names for display
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct BookingDetails {
    pub id: Uuid,
    pub property_id: Uuid,
    pub property_title: String,
    pub property_owner_id: Uuid,
    pub booker_id: Uuid,
    pub booker_email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[schema(value_type = String)]
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub booking_date: DateTime<Utc>,
}

/// Create booking request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBooking {
    pub property_id: Uuid,
    /// Check-in date (YYYY-MM-DD)
    pub start_date: Option<NaiveDate>,
    /// Check-out date (YYYY-MM-DD), inclusive
    pub end_date: Option<NaiveDate>,
}

/// Booking ready to be stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub property_id: Uuid,
    pub booker_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub booking_date: DateTime<Utc>,
}

/// Update booking request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBooking {
    pub status: Option<BookingStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Price preview query
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuoteQuery {
    pub property_id: Uuid,
    /// Defaults to today
    pub start_date: Option<NaiveDate>,
    /// Defaults to tomorrow
    pub end_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_and_display() {
        assert_eq!("pending".parse::<BookingStatus>(), Ok(BookingStatus::Pending));
        assert_eq!("Cancelled".parse::<BookingStatus>(), Ok(BookingStatus::Cancelled));
        assert!("archived".parse::<BookingStatus>().is_err());
        assert_eq!(BookingStatus::Completed.to_string(), "Completed");
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
    }

    #[test]
    fn test_status_json() {
        let json = serde_json::to_string(&BookingStatus::Confirmed).unwrap();
        assert_eq!(json, "\"Confirmed\"");
        let status: BookingStatus = serde_json::from_str("\"Completed\"").unwrap();
        assert_eq!(status, BookingStatus::Completed);
    }
}
