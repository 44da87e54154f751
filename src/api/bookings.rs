//! Booking endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::booking::{Booking, BookingDetails, CreateBooking, QuoteQuery, UpdateBooking},
    pricing::BookingQuote,
};

use super::{AppJson, AppQuery, AuthenticatedUser};

/// List bookings visible to the current user
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Bookings", body = Vec<BookingDetails>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<BookingDetails>>> {
    let bookings = state.services.bookings.list(&claims).await?;
    Ok(Json(bookings))
}

/// Preview the price of a stay
#[utoipa::path(
    get,
    path = "/bookings/quote",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(QuoteQuery),
    responses(
        (status = 200, description = "Price preview", body = BookingQuote),
        (status = 400, description = "Invalid date range", body = crate::error::ErrorResponse),
        (status = 404, description = "Property not found")
    )
)]
pub async fn quote_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    AppQuery(query): AppQuery<QuoteQuery>,
) -> AppResult<Json<BookingQuote>> {
    let quote = state.services.bookings.quote(&query).await?;
    Ok(Json(quote))
}

/// Book a property for the current user
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 400, description = "Invalid date range", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Property not found")
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    AppJson(request): AppJson<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let booking = state.services.bookings.create(claims.user_id, &request).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Get booking details
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking details", body = BookingDetails),
        (status = 403, description = "Not allowed"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BookingDetails>> {
    let booking = state.services.bookings.get(&claims, id).await?;
    Ok(Json(booking))
}

/// Update booking status or dates
#[utoipa::path(
    put,
    path = "/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    request_body = UpdateBooking,
    responses(
        (status = 200, description = "Booking updated", body = Booking),
        (status = 400, description = "Invalid date range", body = crate::error::ErrorResponse),
        (status = 403, description = "Not the property owner"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn update_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    AppJson(request): AppJson<UpdateBooking>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.bookings.update(&claims, id, &request).await?;
    Ok(Json(booking))
}

/// Delete a booking
#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 403, description = "Not the booker"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn delete_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.bookings.delete(&claims, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
