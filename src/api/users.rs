//! User administration endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::user::{AssignRole, Role, User},
};

use super::{AppJson, AuthenticatedUser};

/// List all users (admin)
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
) -> AppResult<Json<Vec<User>>> {
    claims.require_admin()?;

    let users = state.services.auth.list_users().await?;
    Ok(Json(users))
}

/// Get user details by ID (self or admin)
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 403, description = "Not allowed"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<User>> {
    claims.require_self_or_admin(id)?;

    let user = state.services.auth.get_by_id(id).await?;
    Ok(Json(user))
}

/// Grant a role to a user (admin)
#[utoipa::path(
    post,
    path = "/users/{id}/roles",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = AssignRole,
    responses(
        (status = 200, description = "Role granted", body = User),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "User not found")
    )
)]
pub async fn assign_role(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    AppJson(request): AppJson<AssignRole>,
) -> AppResult<Json<User>> {
    claims.require_admin()?;

    let user = state.services.auth.assign_role(id, request.role).await?;
    Ok(Json(user))
}

/// Revoke a role from a user (admin)
#[utoipa::path(
    delete,
    path = "/users/{id}/roles/{role}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID"),
        ("role" = Role, Path, description = "Role to revoke")
    ),
    responses(
        (status = 200, description = "Role revoked", body = User),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "User does not hold the role")
    )
)]
pub async fn remove_role(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path((id, role)): Path<(Uuid, Role)>,
) -> AppResult<Json<User>> {
    claims.require_admin()?;

    let user = state.services.auth.remove_role(id, role).await?;
    Ok(Json(user))
}
