//! Remote record store adapter
//!
//! Persistence lives in a hosted tabular store exposing a PostgREST-style
//! REST API: one endpoint per table, query-string filters, JSON rows. The
//! adapter keeps all HTTP concerns here; the typed per-table methods live
//! in the sibling modules and convert wire rows into domain structs.

mod equipment;
mod inventory;
mod tickets;
mod users;
mod visits;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::StoreConfig;

pub const USERS_TABLE: &str = "usuarios";
pub const INVENTORY_TABLE: &str = "estoque";
pub const MOVEMENTS_TABLE: &str = "historico_estoque";
pub const TICKETS_TABLE: &str = "chamados";
pub const VISITS_TABLE: &str = "preventivas";
pub const EQUIPMENT_TABLE: &str = "equipamentos";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store returned {status} for table '{table}': {body}")]
    Status {
        table: String,
        status: StatusCode,
        body: String,
    },

    #[error("store returned no rows for table '{table}'")]
    EmptyReply { table: String },
}

/// HTTP client for the remote record store
#[derive(Debug, Clone)]
pub struct RecordStore {
    client: reqwest::Client,
    base_url: String,
}

impl RecordStore {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if !config.api_key.is_empty() {
            // Both header forms are required by hosted PostgREST deployments
            if let Ok(value) = HeaderValue::from_str(&config.api_key) {
                headers.insert("apikey", value);
            }
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", config.api_key)) {
                headers.insert(AUTHORIZATION, value);
            }
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url, table)
    }

    async fn check(
        table: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(StoreError::Status {
            table: table.to_string(),
            status,
            body,
        })
    }

    /// Fetch every row of a table, ordered by id ascending
    pub(crate) async fn fetch_all<T>(&self, table: &str) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .get(self.table_url(table))
            .query(&[("select", "*"), ("order", "id.asc")])
            .send()
            .await?;
        let response = Self::check(table, response).await?;
        Ok(response.json().await?)
    }

    /// Insert one row; the store assigns the id and echoes the full row back
    pub(crate) async fn insert<F, T>(&self, table: &str, fields: &F) -> Result<T, StoreError>
    where
        F: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.table_url(table))
            .header("Prefer", "return=representation")
            .json(fields)
            .send()
            .await?;
        let response = Self::check(table, response).await?;
        let mut rows: Vec<T> = response.json().await?;
        if rows.is_empty() {
            return Err(StoreError::EmptyReply {
                table: table.to_string(),
            });
        }
        Ok(rows.remove(0))
    }

    /// Patch one row by id and return the stored result
    pub(crate) async fn patch<F, T>(
        &self,
        table: &str,
        id: i64,
        fields: &F,
    ) -> Result<T, StoreError>
    where
        F: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .patch(self.table_url(table))
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
            .json(fields)
            .send()
            .await?;
        let response = Self::check(table, response).await?;
        let mut rows: Vec<T> = response.json().await?;
        if rows.is_empty() {
            return Err(StoreError::EmptyReply {
                table: table.to_string(),
            });
        }
        Ok(rows.remove(0))
    }

    /// Delete one row by id
    pub(crate) async fn remove(&self, table: &str, id: i64) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.table_url(table))
            .query(&[("id", format!("eq.{}", id))])
            .send()
            .await?;
        Self::check(table, response).await?;
        Ok(())
    }
}
