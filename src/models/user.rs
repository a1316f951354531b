//! User model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::AppError;

use super::enums::Role;

/// Wire row from the `usuarios` table
#[derive(Debug, Clone, Deserialize)]
pub struct UserRow {
    id: i64,
    nome: String,
    email: String,
    senha: String,
    nivel: String,
    ativo: Option<bool>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.nome,
            email: row.email,
            password: row.senha,
            role: Role::from_wire(&row.nivel),
            active: row.ativo,
        }
    }
}

/// Write payload for the `usuarios` table (store assigns the id)
#[derive(Debug, Clone, Serialize)]
pub struct UserFields {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub nivel: String,
    pub ativo: Option<bool>,
}

impl From<&User> for UserFields {
    fn from(user: &User) -> Self {
        UserFields {
            nome: user.name.clone(),
            email: user.email.clone(),
            senha: user.password.clone(),
            nivel: user.role.wire_value().to_string(),
            ativo: user.active,
        }
    }
}

/// Console user account.
///
/// Credentials are stored and compared in the clear, as in the original
/// deployment; backup export/import round-trips the full record, so the
/// password field stays serializable.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    /// Unset means active (default-allow); only an explicit `false` blocks login
    pub active: Option<bool>,
}

impl User {
    /// An account is active unless its flag is explicitly false
    pub fn is_active(&self) -> bool {
        self.active != Some(false)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Require admin privileges
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Authorization(
                "Administrator privileges required".to_string(),
            ))
        }
    }
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "Name must not be blank"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password must not be blank"))]
    pub password: String,
    pub role: Role,
}

/// Update user request (partial; omitted fields keep their current value)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub active: Option<bool>,
}
