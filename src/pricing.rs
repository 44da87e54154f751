//! Booking price and date-range validation
//!
//! Bookings are billed per calendar day with an inclusive count: both the
//! start and the end date are chargeable, so a same-day booking is one day
//! and a booking ending the next day is two days.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Rejected booking date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidRangeError {
    #[error("start date is required")]
    MissingStart,

    #[error("end date is required")]
    MissingEnd,

    #[error("end date {end} is before start date {start}")]
    Inverted { start: NaiveDate, end: NaiveDate },
}

/// Computed price for a validated date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookingQuote {
    /// Price charged per day
    #[schema(value_type = String, example = "75.25")]
    pub day_rate: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Number of chargeable days (start and end included)
    pub day_count: i64,
    /// Total price, rounded to cents
    #[schema(value_type = String, example = "150.50")]
    pub total_price: Decimal,
}

/// Check that both dates are present and the range is not inverted
pub fn validate_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(NaiveDate, NaiveDate), InvalidRangeError> {
    let start = start.ok_or(InvalidRangeError::MissingStart)?;
    let end = end.ok_or(InvalidRangeError::MissingEnd)?;

    if end < start {
        return Err(InvalidRangeError::Inverted { start, end });
    }

    Ok((start, end))
}

/// Inclusive day count between two dates: `|end - start| + 1`
///
/// Calendar dates carry no time component so the elapsed span is already a
/// whole number of days.
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs() + 1
}

/// Round an amount to cents, halves away from zero
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Validate the range and compute the total price for `day_rate`
pub fn quote(
    day_rate: Decimal,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<BookingQuote, InvalidRangeError> {
    let (start_date, end_date) = validate_range(start, end)?;
    let day_count = inclusive_day_count(start_date, end_date);

    Ok(BookingQuote {
        day_rate,
        start_date,
        end_date,
        day_count,
        total_price: round_currency(day_rate * Decimal::from(day_count)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn money(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_same_day_is_one_day() {
        let q = quote(money("100.00"), Some(date(2024, 1, 1)), Some(date(2024, 1, 1))).unwrap();
        assert_eq!(q.day_count, 1);
        assert_eq!(q.total_price, money("100.00"));
    }

    #[test]
    fn test_next_day_is_two_days() {
        assert_eq!(inclusive_day_count(date(2024, 1, 1), date(2024, 1, 2)), 2);
    }

    #[test]
    fn test_three_day_range() {
        let q = quote(money("50.00"), Some(date(2024, 1, 1)), Some(date(2024, 1, 3))).unwrap();
        assert_eq!(q.day_count, 3);
        assert_eq!(q.total_price, money("150.00"));
        assert_eq!(q.start_date, date(2024, 1, 1));
        assert_eq!(q.end_date, date(2024, 1, 3));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let err = quote(money("75.25"), Some(date(2024, 3, 10)), Some(date(2024, 3, 9))).unwrap_err();
        assert_eq!(
            err,
            InvalidRangeError::Inverted {
                start: date(2024, 3, 10),
                end: date(2024, 3, 9),
            }
        );
    }

    #[test]
    fn test_missing_dates_are_rejected() {
        assert_eq!(
            validate_range(None, Some(date(2024, 1, 1))),
            Err(InvalidRangeError::MissingStart)
        );
        assert_eq!(
            validate_range(Some(date(2024, 1, 1)), None),
            Err(InvalidRangeError::MissingEnd)
        );
        assert_eq!(validate_range(None, None), Err(InvalidRangeError::MissingStart));
    }

    #[test]
    fn test_total_matches_rate_times_days_across_months() {
        let rate = money("75.25");
        let start = date(2024, 2, 27);
        for offset in 0..40 {
            let end = start + chrono::Duration::days(offset);
            let q = quote(rate, Some(start), Some(end)).unwrap();
            assert_eq!(q.day_count, offset + 1);
            assert_eq!(q.total_price, rate * Decimal::from(offset + 1));
        }
    }

    #[test]
    fn test_leap_day_counted() {
        assert_eq!(inclusive_day_count(date(2024, 2, 28), date(2024, 3, 1)), 3);
        assert_eq!(inclusive_day_count(date(2023, 2, 28), date(2023, 3, 1)), 2);
    }

    #[test]
    fn test_total_rounded_to_cents() {
        let q = quote(money("10.005"), Some(date(2024, 1, 1)), Some(date(2024, 1, 1))).unwrap();
        assert_eq!(q.total_price, money("10.01"));

        let q = quote(money("33.333"), Some(date(2024, 1, 1)), Some(date(2024, 1, 3))).unwrap();
        assert_eq!(q.total_price, money("100.00"));
    }

    #[test]
    fn test_error_messages() {
        let err = InvalidRangeError::Inverted {
            start: date(2024, 3, 10),
            end: date(2024, 3, 9),
        };
        assert_eq!(err.to_string(), "end date 2024-03-09 is before start date 2024-03-10");
        assert_eq!(InvalidRangeError::MissingEnd.to_string(), "end date is required");
    }
}
