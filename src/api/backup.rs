//! Backup export/import endpoints

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    services::backup::BackupDocument,
};

use super::ActingUser;

/// Export all collections as a downloadable JSON document
#[utoipa::path(
    get,
    path = "/backup/export",
    tag = "backup",
    responses(
        (status = 200, description = "Backup document", body = BackupDocument)
    )
)]
pub async fn export_backup(
    State(state): State<crate::AppState>,
    ActingUser(acting): ActingUser,
) -> AppResult<Response> {
    acting.require_admin()?;
    let (filename, document) = state.services.backup.export().await;

    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", filename))
        .map_err(|_| AppError::Internal("Invalid backup file name".to_string()))?;

    let mut response = Json(document).into_response();
    response
        .headers_mut()
        .insert(header::CONTENT_DISPOSITION, disposition);
    Ok(response)
}

/// Import a backup document, replacing every collection it carries.
///
/// Restores only the in-memory mirror; the remote store is left untouched.
#[utoipa::path(
    post,
    path = "/backup/import",
    tag = "backup",
    request_body = BackupDocument,
    responses(
        (status = 204, description = "Backup imported"),
        (status = 400, description = "Malformed backup document")
    )
)]
pub async fn import_backup(
    State(state): State<crate::AppState>,
    ActingUser(acting): ActingUser,
    Json(raw): Json<serde_json::Value>,
) -> AppResult<StatusCode> {
    acting.require_admin()?;
    let document: BackupDocument = serde_json::from_value(raw)
        .map_err(|e| AppError::Import(format!("Unrecognized backup document: {}", e)))?;
    state.services.backup.import(document).await?;
    Ok(StatusCode::NO_CONTENT)
}
