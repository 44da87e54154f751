//! Review endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::review::{CreateReview, Review, UpdateReview},
};

use super::{AppJson, AuthenticatedUser};

/// List all reviews
#[utoipa::path(
    get,
    path = "/reviews",
    tag = "reviews",
    responses(
        (status = 200, description = "Reviews", body = Vec<Review>)
    )
)]
pub async fn list_reviews(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Review>>> {
    let reviews = state.services.reviews.list().await?;
    Ok(Json(reviews))
}

/// Get a review by ID
#[utoipa::path(
    get,
    path = "/reviews/{id}",
    tag = "reviews",
    params(
        ("id" = Uuid, Path, description = "Review ID")
    ),
    responses(
        (status = 200, description = "Review", body = Review),
        (status = 404, description = "Review not found")
    )
)]
pub async fn get_review(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Review>> {
    let review = state.services.reviews.get_by_id(id).await?;
    Ok(Json(review))
}

/// List reviews of a property
#[utoipa::path(
    get,
    path = "/properties/{id}/reviews",
    tag = "reviews",
    params(
        ("id" = Uuid, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Reviews of the property", body = Vec<Review>),
        (status = 404, description = "Property not found")
    )
)]
pub async fn list_property_reviews(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Review>>> {
    let reviews = state.services.reviews.list_for_property(id).await?;
    Ok(Json(reviews))
}

/// Review a property as the current user
#[utoipa::path(
    post,
    path = "/reviews",
    tag = "reviews",
    security(("bearer_auth" = [])),
    request_body = CreateReview,
    responses(
        (status = 201, description = "Review posted", body = Review),
        (status = 400, description = "Invalid rating"),
        (status = 404, description = "Property not found")
    )
)]
pub async fn create_review(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    AppJson(data): AppJson<CreateReview>,
) -> AppResult<(StatusCode, Json<Review>)> {
    let review = state.services.reviews.create(claims.user_id, &data).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// Edit a review
#[utoipa::path(
    put,
    path = "/reviews/{id}",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Review ID")
    ),
    request_body = UpdateReview,
    responses(
        (status = 200, description = "Review updated", body = Review),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Review not found")
    )
)]
pub async fn update_review(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    AppJson(data): AppJson<UpdateReview>,
) -> AppResult<Json<Review>> {
    let review = state.services.reviews.update(&claims, id, &data).await?;
    Ok(Json(review))
}

/// Delete a review
#[utoipa::path(
    delete,
    path = "/reviews/{id}",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Review ID")
    ),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "Review not found")
    )
)]
pub async fn delete_review(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.reviews.delete(&claims, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
