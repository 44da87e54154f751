//! Property type and amenity endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::amenity::{Amenity, CreateAmenity, CreatePropertyType, PropertyType},
};

use super::{AppJson, AuthenticatedUser};

/// List property types
#[utoipa::path(
    get,
    path = "/property-types",
    tag = "catalog",
    responses(
        (status = 200, description = "Property types", body = Vec<PropertyType>)
    )
)]
pub async fn list_property_types(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<PropertyType>>> {
    let types = state.services.catalog.list_property_types().await?;
    Ok(Json(types))
}

/// Create a property type (admin)
#[utoipa::path(
    post,
    path = "/property-types",
    tag = "catalog",
    security(("bearer_auth" = [])),
    request_body = CreatePropertyType,
    responses(
        (status = 201, description = "Property type created", body = PropertyType),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn create_property_type(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    AppJson(data): AppJson<CreatePropertyType>,
) -> AppResult<(StatusCode, Json<PropertyType>)> {
    claims.require_admin()?;

    let created = state.services.catalog.create_property_type(&data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Delete a property type (admin)
#[utoipa::path(
    delete,
    path = "/property-types/{id}",
    tag = "catalog",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Property type ID")
    ),
    responses(
        (status = 204, description = "Property type deleted"),
        (status = 404, description = "Property type not found"),
        (status = 409, description = "Property type still in use")
    )
)]
pub async fn delete_property_type(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;

    state.services.catalog.delete_property_type(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List amenities
#[utoipa::path(
    get,
    path = "/amenities",
    tag = "catalog",
    responses(
        (status = 200, description = "Amenities", body = Vec<Amenity>)
    )
)]
pub async fn list_amenities(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Amenity>>> {
    let amenities = state.services.catalog.list_amenities().await?;
    Ok(Json(amenities))
}

/// Create an amenity (admin)
#[utoipa::path(
    post,
    path = "/amenities",
    tag = "catalog",
    security(("bearer_auth" = [])),
    request_body = CreateAmenity,
    responses(
        (status = 201, description = "Amenity created", body = Amenity),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn create_amenity(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    AppJson(data): AppJson<CreateAmenity>,
) -> AppResult<(StatusCode, Json<Amenity>)> {
    claims.require_admin()?;

    let created = state.services.catalog.create_amenity(&data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
