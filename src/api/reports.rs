//! Report endpoint

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    derived::{build_report, Report, ReportPeriod},
    error::AppResult,
};

use super::ActingUser;

/// Activity report for an optional inclusive date window
#[utoipa::path(
    get,
    path = "/reports",
    tag = "derived",
    params(ReportPeriod),
    responses(
        (status = 200, description = "Report rollup", body = Report)
    )
)]
pub async fn get_report(
    State(state): State<crate::AppState>,
    _acting_user: ActingUser,
    Query(period): Query<ReportPeriod>,
) -> AppResult<Json<Report>> {
    let data = state.data.read().await;
    Ok(Json(build_report(&data, period)))
}
