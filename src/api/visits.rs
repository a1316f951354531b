//! Preventive-maintenance visit endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::visit::{Checklist, CreateVisit},
    models::PreventiveVisit,
};

use super::ActingUser;

/// List visits
#[utoipa::path(
    get,
    path = "/visits",
    tag = "visits",
    responses(
        (status = 200, description = "Visit list", body = Vec<PreventiveVisit>)
    )
)]
pub async fn list_visits(
    State(state): State<crate::AppState>,
    _acting_user: ActingUser,
) -> AppResult<Json<Vec<PreventiveVisit>>> {
    Ok(Json(state.services.visits.list().await))
}

/// Schedule a visit
#[utoipa::path(
    post,
    path = "/visits",
    tag = "visits",
    request_body = CreateVisit,
    responses(
        (status = 201, description = "Visit scheduled", body = PreventiveVisit)
    )
)]
pub async fn create_visit(
    State(state): State<crate::AppState>,
    ActingUser(acting): ActingUser,
    Json(input): Json<CreateVisit>,
) -> AppResult<(StatusCode, Json<PreventiveVisit>)> {
    let visit = state.services.visits.schedule(input, &acting).await?;
    Ok((StatusCode::CREATED, Json(visit)))
}

/// Complete a visit with its checklist
#[utoipa::path(
    post,
    path = "/visits/{id}/complete",
    tag = "visits",
    params(("id" = i64, Path, description = "Visit ID")),
    request_body = Checklist,
    responses(
        (status = 200, description = "Visit completed", body = PreventiveVisit),
        (status = 422, description = "Visit already done")
    )
)]
pub async fn complete_visit(
    State(state): State<crate::AppState>,
    _acting_user: ActingUser,
    Path(id): Path<i64>,
    Json(checklist): Json<Checklist>,
) -> AppResult<Json<PreventiveVisit>> {
    let visit = state.services.visits.complete(id, checklist).await?;
    Ok(Json(visit))
}

/// Delete a visit
#[utoipa::path(
    delete,
    path = "/visits/{id}",
    tag = "visits",
    params(("id" = i64, Path, description = "Visit ID")),
    responses(
        (status = 204, description = "Visit deleted")
    )
)]
pub async fn delete_visit(
    State(state): State<crate::AppState>,
    _acting_user: ActingUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.visits.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
