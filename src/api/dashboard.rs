//! Dashboard endpoint

use axum::{extract::State, Json};

use crate::{
    derived::{build_dashboard, DashboardSummary},
    error::AppResult,
};

use super::ActingUser;

/// Dashboard summary over all collections
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "derived",
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardSummary)
    )
)]
pub async fn get_dashboard(
    State(state): State<crate::AppState>,
    _acting_user: ActingUser,
) -> AppResult<Json<DashboardSummary>> {
    let data = state.data.read().await;
    Ok(Json(build_dashboard(&data)))
}
