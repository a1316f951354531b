//! User administration endpoints (admin only)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::user::{CreateUser, UpdateUser},
    models::User,
};

use super::ActingUser;

/// List user accounts
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "User list", body = Vec<User>),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    ActingUser(acting): ActingUser,
) -> AppResult<Json<Vec<User>>> {
    acting.require_admin()?;
    Ok(Json(state.services.users.list().await))
}

/// Create a user account
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    ActingUser(acting): ActingUser,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    acting.require_admin()?;
    let user = state.services.users.create(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update a user account
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn update_user(
    State(state): State<crate::AppState>,
    ActingUser(acting): ActingUser,
    Path(id): Path<i64>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    acting.require_admin()?;
    let user = state.services.users.update(id, input).await?;
    Ok(Json(user))
}

/// Toggle whether an account may log in
#[utoipa::path(
    post,
    path = "/users/{id}/toggle-active",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Active flag flipped", body = User),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn toggle_active(
    State(state): State<crate::AppState>,
    ActingUser(acting): ActingUser,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    acting.require_admin()?;
    let user = state.services.users.toggle_active(id).await?;
    Ok(Json(user))
}

/// Delete a user account
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn delete_user(
    State(state): State<crate::AppState>,
    ActingUser(acting): ActingUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    acting.require_admin()?;
    state.services.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
