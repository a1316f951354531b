//! Notification endpoint

use axum::{extract::State, Json};
use chrono::Local;

use crate::{
    derived::{build_notifications, Notification},
    error::AppResult,
};

use super::ActingUser;

/// Current notifications, derived fresh on every call
#[utoipa::path(
    get,
    path = "/notifications",
    tag = "derived",
    responses(
        (status = 200, description = "Notification list", body = Vec<Notification>)
    )
)]
pub async fn list_notifications(
    State(state): State<crate::AppState>,
    _acting_user: ActingUser,
) -> AppResult<Json<Vec<Notification>>> {
    let data = state.data.read().await;
    Ok(Json(build_notifications(&data, Local::now().date_naive())))
}
