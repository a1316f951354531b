//! API handlers for the console REST endpoints

pub mod auth;
pub mod backup;
pub mod dashboard;
pub mod equipment;
pub mod health;
pub mod inventory;
pub mod notifications;
pub mod openapi;
pub mod reports;
pub mod search;
pub mod tickets;
pub mod users;
pub mod visits;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::{error::AppError, models::User, AppState};

/// Header carrying the acting user's id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor resolving the acting user from the `x-user-id` header.
///
/// Identity is client-asserted, as in the original deployment; what moved
/// server-side is the role check, which handlers perform on the resolved
/// account rather than trusting a role claim from the client.
pub struct ActingUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for ActingUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing x-user-id header".to_string()))?;

        let id: i64 = raw
            .parse()
            .map_err(|_| AppError::Authentication("Invalid x-user-id header".to_string()))?;

        let user = state.services.auth.resolve(id).await?;
        Ok(ActingUser(user))
    }
}
