//! Support ticket endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::ticket::{CreateTicket, ResolveTicket, UpdateTicket},
    models::Ticket,
};

use super::ActingUser;

/// List tickets
#[utoipa::path(
    get,
    path = "/tickets",
    tag = "tickets",
    responses(
        (status = 200, description = "Ticket list", body = Vec<Ticket>)
    )
)]
pub async fn list_tickets(
    State(state): State<crate::AppState>,
    _acting_user: ActingUser,
) -> AppResult<Json<Vec<Ticket>>> {
    Ok(Json(state.services.tickets.list().await))
}

/// Open a ticket
#[utoipa::path(
    post,
    path = "/tickets",
    tag = "tickets",
    request_body = CreateTicket,
    responses(
        (status = 201, description = "Ticket created", body = Ticket)
    )
)]
pub async fn create_ticket(
    State(state): State<crate::AppState>,
    _acting_user: ActingUser,
    Json(input): Json<CreateTicket>,
) -> AppResult<(StatusCode, Json<Ticket>)> {
    let ticket = state.services.tickets.create(input).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// Edit a ticket's descriptive fields
#[utoipa::path(
    put,
    path = "/tickets/{id}",
    tag = "tickets",
    params(("id" = i64, Path, description = "Ticket ID")),
    request_body = UpdateTicket,
    responses(
        (status = 200, description = "Ticket updated", body = Ticket)
    )
)]
pub async fn update_ticket(
    State(state): State<crate::AppState>,
    _acting_user: ActingUser,
    Path(id): Path<i64>,
    Json(input): Json<UpdateTicket>,
) -> AppResult<Json<Ticket>> {
    let ticket = state.services.tickets.update(id, input).await?;
    Ok(Json(ticket))
}

/// Claim a pending ticket
#[utoipa::path(
    post,
    path = "/tickets/{id}/claim",
    tag = "tickets",
    params(("id" = i64, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket in progress", body = Ticket),
        (status = 422, description = "Ticket is not pending")
    )
)]
pub async fn claim_ticket(
    State(state): State<crate::AppState>,
    ActingUser(acting): ActingUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Ticket>> {
    let ticket = state.services.tickets.claim(id, &acting).await?;
    Ok(Json(ticket))
}

/// Start work on a pending ticket
#[utoipa::path(
    post,
    path = "/tickets/{id}/start",
    tag = "tickets",
    params(("id" = i64, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket in progress", body = Ticket),
        (status = 422, description = "Ticket is not pending")
    )
)]
pub async fn start_ticket(
    State(state): State<crate::AppState>,
    ActingUser(acting): ActingUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Ticket>> {
    let ticket = state.services.tickets.start(id, &acting).await?;
    Ok(Json(ticket))
}

/// Resolve an in-progress ticket
#[utoipa::path(
    post,
    path = "/tickets/{id}/resolve",
    tag = "tickets",
    params(("id" = i64, Path, description = "Ticket ID")),
    request_body = ResolveTicket,
    responses(
        (status = 200, description = "Ticket done", body = Ticket),
        (status = 400, description = "Blank resolution"),
        (status = 422, description = "Ticket is not in progress")
    )
)]
pub async fn resolve_ticket(
    State(state): State<crate::AppState>,
    _acting_user: ActingUser,
    Path(id): Path<i64>,
    Json(input): Json<ResolveTicket>,
) -> AppResult<Json<Ticket>> {
    let ticket = state.services.tickets.resolve(id, input).await?;
    Ok(Json(ticket))
}

/// Delete a ticket
#[utoipa::path(
    delete,
    path = "/tickets/{id}",
    tag = "tickets",
    params(("id" = i64, Path, description = "Ticket ID")),
    responses(
        (status = 204, description = "Ticket deleted")
    )
)]
pub async fn delete_ticket(
    State(state): State<crate::AppState>,
    _acting_user: ActingUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.tickets.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
