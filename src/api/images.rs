//! Property image endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::image::{CreateImage, Image, UpdateImage},
};

use super::{AppJson, AuthenticatedUser};

/// List images of a property in display order
#[utoipa::path(
    get,
    path = "/properties/{id}/images",
    tag = "images",
    params(
        ("id" = Uuid, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Images of the property", body = Vec<Image>),
        (status = 404, description = "Property not found")
    )
)]
pub async fn list_images(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<Image>>> {
    let images = state.services.properties.list_images(id).await?;
    Ok(Json(images))
}

/// Add an image to a property
#[utoipa::path(
    post,
    path = "/properties/{id}/images",
    tag = "images",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Property ID")
    ),
    request_body = CreateImage,
    responses(
        (status = 201, description = "Image added", body = Image),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Property not found")
    )
)]
pub async fn add_image(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    AppJson(data): AppJson<CreateImage>,
) -> AppResult<(StatusCode, Json<Image>)> {
    let image = state.services.properties.add_image(&claims, id, &data).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

/// Update an image
#[utoipa::path(
    put,
    path = "/images/{id}",
    tag = "images",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Image ID")
    ),
    request_body = UpdateImage,
    responses(
        (status = 200, description = "Image updated", body = Image),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Image not found")
    )
)]
pub async fn update_image(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    AppJson(data): AppJson<UpdateImage>,
) -> AppResult<Json<Image>> {
    let image = state.services.properties.update_image(&claims, id, &data).await?;
    Ok(Json(image))
}

/// Delete an image
#[utoipa::path(
    delete,
    path = "/images/{id}",
    tag = "images",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Image ID")
    ),
    responses(
        (status = 204, description = "Image deleted"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Image not found")
    )
)]
pub async fn delete_image(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.properties.delete_image(&claims, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
