//! Typed access to the `usuarios` table

use crate::models::user::{UserFields, UserRow};
use crate::models::User;

use super::{RecordStore, StoreError, USERS_TABLE};

impl RecordStore {
    pub async fn fetch_users(&self) -> Result<Vec<User>, StoreError> {
        let rows: Vec<UserRow> = self.fetch_all(USERS_TABLE).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    pub async fn insert_user(&self, fields: &UserFields) -> Result<User, StoreError> {
        let row: UserRow = self.insert(USERS_TABLE, fields).await?;
        Ok(User::from(row))
    }

    pub async fn update_user(&self, id: i64, fields: &UserFields) -> Result<User, StoreError> {
        let row: UserRow = self.patch(USERS_TABLE, id, fields).await?;
        Ok(User::from(row))
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), StoreError> {
        self.remove(USERS_TABLE, id).await
    }
}
