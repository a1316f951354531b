//! User account administration

use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::user::{CreateUser, UpdateUser, UserFields};
use crate::models::User;
use crate::state::{remove_by_id, upsert_by_id, SharedState};
use crate::store::RecordStore;

pub struct UserService {
    store: RecordStore,
    state: SharedState,
}

impl UserService {
    pub fn new(store: RecordStore, state: SharedState) -> Self {
        Self { store, state }
    }

    pub async fn list(&self) -> Vec<User> {
        self.state.read().await.users.clone()
    }

    pub async fn create(&self, input: CreateUser) -> AppResult<User> {
        input
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        {
            let data = self.state.read().await;
            if data.users.iter().any(|u| u.email == input.email) {
                return Err(AppError::Validation(format!(
                    "A user with email {} already exists",
                    input.email
                )));
            }
        }

        let fields = UserFields {
            nome: input.name,
            email: input.email,
            senha: input.password,
            nivel: input.role.wire_value().to_string(),
            ativo: Some(true),
        };
        let user = self.store.insert_user(&fields).await?;

        let mut data = self.state.write().await;
        upsert_by_id(&mut data.users, user.clone(), |u| u.id);
        Ok(user)
    }

    pub async fn update(&self, id: i64, input: UpdateUser) -> AppResult<User> {
        input
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let mut user = self.find(id).await?;
        if let Some(name) = input.name {
            user.name = name;
        }
        if let Some(email) = input.email {
            user.email = email;
        }
        if let Some(password) = input.password {
            user.password = password;
        }
        if let Some(role) = input.role {
            user.role = role;
        }
        if let Some(active) = input.active {
            user.active = Some(active);
        }

        let stored = self.store.update_user(id, &UserFields::from(&user)).await?;
        let mut data = self.state.write().await;
        upsert_by_id(&mut data.users, stored.clone(), |u| u.id);
        Ok(stored)
    }

    /// Flip the active flag; an unset flag counts as active
    pub async fn toggle_active(&self, id: i64) -> AppResult<User> {
        let mut user = self.find(id).await?;
        user.active = Some(!user.is_active());

        let stored = self.store.update_user(id, &UserFields::from(&user)).await?;
        let mut data = self.state.write().await;
        upsert_by_id(&mut data.users, stored.clone(), |u| u.id);
        Ok(stored)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.find(id).await?;
        self.store.delete_user(id).await?;
        let mut data = self.state.write().await;
        remove_by_id(&mut data.users, id, |u| u.id);
        Ok(())
    }

    async fn find(&self, id: i64) -> AppResult<User> {
        let data = self.state.read().await;
        data.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }
}
