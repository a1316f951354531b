//! Session-less authentication against the loaded user collection
//!
//! Credentials are compared in the clear against the mirrored `usuarios`
//! rows, as in the original deployment. Token issuance and password hashing
//! are out of scope; the caller gets the matched account back and identifies
//! itself on later requests by user id.

use crate::error::{AppError, AppResult};
use crate::models::User;
use crate::state::SharedState;

pub struct AuthService {
    state: SharedState,
}

impl AuthService {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }

    /// Look up a user by credentials. Deactivated accounts fail the same
    /// way unknown ones do; an unset active flag allows login.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let data = self.state.read().await;
        data.users
            .iter()
            .find(|u| u.email == email && u.password == password && u.is_active())
            .cloned()
            .ok_or_else(|| AppError::Authentication("Invalid credentials".to_string()))
    }

    /// Resolve an acting user by id (used by the request extractor)
    pub async fn resolve(&self, id: i64) -> AppResult<User> {
        let data = self.state.read().await;
        data.users
            .iter()
            .find(|u| u.id == id && u.is_active())
            .cloned()
            .ok_or_else(|| AppError::Authentication("Unknown or inactive user".to_string()))
    }
}
