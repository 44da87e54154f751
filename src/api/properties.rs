//! Property listing endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        amenity::{AttachAmenity, PropertyAmenity},
        property::{CreateProperty, Property, PropertyQuery, PropertyShort, UpdateProperty},
    },
};

use super::{AppJson, AppQuery, AuthenticatedUser};

/// Paginated response wrapper
#[derive(Serialize, ToSchema)]
pub struct PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// List of items
    pub items: Vec<T>,
    /// Total number of items
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Items per page
    pub per_page: i64,
}

/// Search properties with pagination
#[utoipa::path(
    get,
    path = "/properties",
    tag = "properties",
    params(PropertyQuery),
    responses(
        (status = 200, description = "List of properties", body = PaginatedResponse<PropertyShort>),
        (status = 400, description = "Page out of range", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_properties(
    State(state): State<crate::AppState>,
    AppQuery(query): AppQuery<PropertyQuery>,
) -> AppResult<Json<PaginatedResponse<PropertyShort>>> {
    let (page, per_page) = query.pagination()?;
    let (items, total) = state.services.properties.search(&query).await?;

    Ok(Json(PaginatedResponse {
        items,
        total,
        page,
        per_page,
    }))
}

/// Get property details by ID
#[utoipa::path(
    get,
    path = "/properties/{id}",
    tag = "properties",
    params(
        ("id" = Uuid, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Property details", body = Property),
        (status = 404, description = "Property not found")
    )
)]
pub async fn get_property(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Property>> {
    let property = state.services.properties.get_by_id(id).await?;
    Ok(Json(property))
}

/// List a new property
#[utoipa::path(
    post,
    path = "/properties",
    tag = "properties",
    security(("bearer_auth" = [])),
    request_body = CreateProperty,
    responses(
        (status = 201, description = "Property created", body = Property),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Only admins may list for another owner")
    )
)]
pub async fn create_property(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    AppJson(data): AppJson<CreateProperty>,
) -> AppResult<(StatusCode, Json<Property>)> {
    let property = state.services.properties.create(&claims, &data).await?;
    Ok((StatusCode::CREATED, Json(property)))
}

/// Update a property
#[utoipa::path(
    put,
    path = "/properties/{id}",
    tag = "properties",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Property ID")
    ),
    request_body = UpdateProperty,
    responses(
        (status = 200, description = "Property updated", body = Property),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Property not found")
    )
)]
pub async fn update_property(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    AppJson(data): AppJson<UpdateProperty>,
) -> AppResult<Json<Property>> {
    let property = state.services.properties.update(&claims, id, &data).await?;
    Ok(Json(property))
}

/// Delete a property
#[utoipa::path(
    delete,
    path = "/properties/{id}",
    tag = "properties",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Property ID")
    ),
    responses(
        (status = 204, description = "Property deleted"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Property not found")
    )
)]
pub async fn delete_property(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.properties.delete(&claims, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List amenities of a property
#[utoipa::path(
    get,
    path = "/properties/{id}/amenities",
    tag = "properties",
    params(
        ("id" = Uuid, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Amenities of the property", body = Vec<PropertyAmenity>),
        (status = 404, description = "Property not found")
    )
)]
pub async fn list_property_amenities(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<PropertyAmenity>>> {
    let amenities = state.services.properties.list_amenities(id).await?;
    Ok(Json(amenities))
}

/// Attach an amenity to a property
#[utoipa::path(
    post,
    path = "/properties/{id}/amenities",
    tag = "properties",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Property ID")
    ),
    request_body = AttachAmenity,
    responses(
        (status = 201, description = "Amenity attached", body = PropertyAmenity),
        (status = 404, description = "Property or amenity not found"),
        (status = 409, description = "Amenity already attached")
    )
)]
pub async fn attach_amenity(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    AppJson(request): AppJson<AttachAmenity>,
) -> AppResult<(StatusCode, Json<PropertyAmenity>)> {
    let link = state
        .services
        .properties
        .attach_amenity(&claims, id, request.amenity_id)
        .await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// Detach an amenity from a property
#[utoipa::path(
    delete,
    path = "/properties/{id}/amenities/{amenity_id}",
    tag = "properties",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Property ID"),
        ("amenity_id" = Uuid, Path, description = "Amenity ID")
    ),
    responses(
        (status = 204, description = "Amenity detached"),
        (status = 404, description = "Amenity not attached")
    )
)]
pub async fn detach_amenity(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path((id, amenity_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    state
        .services
        .properties
        .detach_amenity(&claims, id, amenity_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
