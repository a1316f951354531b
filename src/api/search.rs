//! Global search endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    derived::{global_search, SearchOutcome},
    error::AppResult,
};

use super::ActingUser;

#[derive(Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Search text, two characters minimum
    #[serde(default)]
    pub q: String,
}

/// Search tickets, inventory, visits and equipment
#[utoipa::path(
    get,
    path = "/search",
    tag = "derived",
    params(SearchQuery),
    responses(
        (status = 200, description = "Search outcome", body = SearchOutcome)
    )
)]
pub async fn search(
    State(state): State<crate::AppState>,
    _acting_user: ActingUser,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<SearchOutcome>> {
    let data = state.data.read().await;
    Ok(Json(global_search(&data, &query.q)))
}
