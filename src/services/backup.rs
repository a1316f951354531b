//! Backup export and import
//!
//! The backup document keeps the original deployment's top-level keys so
//! old export files stay importable. Import replaces each collection that
//! is present in the document and leaves the others untouched. It writes
//! only to the in-memory mirror, never through to the store, mirroring the
//! original restore behavior.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::models::{Equipment, InventoryItem, PreventiveVisit, StockMovement, Ticket, User};
use crate::state::SharedState;

/// Full-state backup document; key names are fixed by the export format
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BackupDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usuarios: Option<Vec<User>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estoque: Option<Vec<InventoryItem>>,
    #[serde(rename = "historicoEstoque", skip_serializing_if = "Option::is_none")]
    pub historico_estoque: Option<Vec<StockMovement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chamados: Option<Vec<Ticket>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preventivas: Option<Vec<PreventiveVisit>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipamentos: Option<Vec<Equipment>>,
}

/// Download file name for a backup taken on the given day
pub fn export_filename(date: NaiveDate) -> String {
    format!("backup-ti-{}.json", date.format("%Y-%m-%d"))
}

pub struct BackupService {
    state: SharedState,
}

impl BackupService {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }

    pub async fn export(&self) -> (String, BackupDocument) {
        let data = self.state.read().await;
        let document = BackupDocument {
            usuarios: Some(data.users.clone()),
            estoque: Some(data.inventory.clone()),
            historico_estoque: Some(data.movements.clone()),
            chamados: Some(data.tickets.clone()),
            preventivas: Some(data.visits.clone()),
            equipamentos: Some(data.equipment.clone()),
        };
        (export_filename(Local::now().date_naive()), document)
    }

    /// Replace every collection the document carries; absent keys keep the
    /// current data.
    pub async fn import(&self, document: BackupDocument) -> AppResult<()> {
        let mut data = self.state.write().await;
        if let Some(users) = document.usuarios {
            data.users = users;
        }
        if let Some(inventory) = document.estoque {
            data.inventory = inventory;
        }
        if let Some(movements) = document.historico_estoque {
            data.movements = movements;
        }
        if let Some(tickets) = document.chamados {
            data.tickets = tickets;
        }
        if let Some(visits) = document.preventivas {
            data.visits = visits;
        }
        if let Some(equipment) = document.equipamentos {
            data.equipment = equipment;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_filename_embeds_the_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(export_filename(date), "backup-ti-2024-03-09.json");
    }
}
