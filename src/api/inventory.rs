//! Stock inventory endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::inventory::{InventoryItemInput, MovementRequest},
    models::{InventoryItem, StockMovement},
    services::inventory::MovementResult,
};

use super::ActingUser;

/// List inventory items
#[utoipa::path(
    get,
    path = "/inventory",
    tag = "inventory",
    responses(
        (status = 200, description = "Inventory list", body = Vec<InventoryItem>)
    )
)]
pub async fn list_inventory(
    State(state): State<crate::AppState>,
    _acting_user: ActingUser,
) -> AppResult<Json<Vec<InventoryItem>>> {
    Ok(Json(state.services.inventory.list().await))
}

/// Create an inventory item
#[utoipa::path(
    post,
    path = "/inventory",
    tag = "inventory",
    request_body = InventoryItemInput,
    responses(
        (status = 201, description = "Item created", body = InventoryItem)
    )
)]
pub async fn create_item(
    State(state): State<crate::AppState>,
    _acting_user: ActingUser,
    Json(input): Json<InventoryItemInput>,
) -> AppResult<(StatusCode, Json<InventoryItem>)> {
    let item = state.services.inventory.create(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update an inventory item
#[utoipa::path(
    put,
    path = "/inventory/{id}",
    tag = "inventory",
    params(("id" = i64, Path, description = "Item ID")),
    request_body = InventoryItemInput,
    responses(
        (status = 200, description = "Item updated", body = InventoryItem)
    )
)]
pub async fn update_item(
    State(state): State<crate::AppState>,
    _acting_user: ActingUser,
    Path(id): Path<i64>,
    Json(input): Json<InventoryItemInput>,
) -> AppResult<Json<InventoryItem>> {
    let item = state.services.inventory.update(id, input).await?;
    Ok(Json(item))
}

/// Delete an inventory item
#[utoipa::path(
    delete,
    path = "/inventory/{id}",
    tag = "inventory",
    params(("id" = i64, Path, description = "Item ID")),
    responses(
        (status = 204, description = "Item deleted")
    )
)]
pub async fn delete_item(
    State(state): State<crate::AppState>,
    _acting_user: ActingUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.inventory.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Register a stock movement against an item
#[utoipa::path(
    post,
    path = "/inventory/{id}/movements",
    tag = "inventory",
    params(("id" = i64, Path, description = "Item ID")),
    request_body = MovementRequest,
    responses(
        (status = 201, description = "Movement registered", body = MovementResult),
        (status = 400, description = "Non-positive quantity")
    )
)]
pub async fn register_movement(
    State(state): State<crate::AppState>,
    ActingUser(acting): ActingUser,
    Path(id): Path<i64>,
    Json(request): Json<MovementRequest>,
) -> AppResult<(StatusCode, Json<MovementResult>)> {
    let result = state
        .services
        .inventory
        .register_movement(id, request, &acting.name)
        .await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// List the full movement ledger
#[utoipa::path(
    get,
    path = "/movements",
    tag = "inventory",
    responses(
        (status = 200, description = "Movement ledger", body = Vec<StockMovement>)
    )
)]
pub async fn list_movements(
    State(state): State<crate::AppState>,
    _acting_user: ActingUser,
) -> AppResult<Json<Vec<StockMovement>>> {
    Ok(Json(state.services.inventory.list_movements().await))
}
