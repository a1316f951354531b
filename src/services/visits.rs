//! Preventive-maintenance visit scheduling and completion

use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::enums::VisitStatus;
use crate::models::visit::{Checklist, CreateVisit, PreventiveVisitFields};
use crate::models::{PreventiveVisit, User};
use crate::state::{remove_by_id, upsert_by_id, SharedState};
use crate::store::RecordStore;

pub struct VisitService {
    store: RecordStore,
    state: SharedState,
}

impl VisitService {
    pub fn new(store: RecordStore, state: SharedState) -> Self {
        Self { store, state }
    }

    pub async fn list(&self) -> Vec<PreventiveVisit> {
        self.state.read().await.visits.clone()
    }

    /// Schedule a visit; the technician defaults to whoever scheduled it
    pub async fn schedule(&self, input: CreateVisit, acting: &User) -> AppResult<PreventiveVisit> {
        input
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let fields = PreventiveVisitFields {
            sala: input.room,
            data: input.date,
            tecnico: input
                .technician
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| acting.name.clone()),
            status: VisitStatus::Pending.wire_value().to_string(),
            observacoes: String::new(),
        };
        let visit = self.store.insert_visit(&fields).await?;

        let mut data = self.state.write().await;
        upsert_by_id(&mut data.visits, visit.clone(), |v| v.id);
        Ok(visit)
    }

    /// Complete a pending visit. The checklist collapses into the stored
    /// observations text; its individual booleans are discarded.
    pub async fn complete(&self, id: i64, checklist: Checklist) -> AppResult<PreventiveVisit> {
        let mut visit = self.find(id).await?;
        if visit.status == VisitStatus::Done {
            return Err(AppError::BusinessRule(format!(
                "Visit {} is already done",
                id
            )));
        }

        visit.status = VisitStatus::Done;
        visit.observations = checklist.to_observations();

        let stored = self
            .store
            .update_visit(id, &PreventiveVisitFields::from(&visit))
            .await?;
        let mut data = self.state.write().await;
        upsert_by_id(&mut data.visits, stored.clone(), |v| v.id);
        Ok(stored)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.find(id).await?;
        self.store.delete_visit(id).await?;
        let mut data = self.state.write().await;
        remove_by_id(&mut data.visits, id, |v| v.id);
        Ok(())
    }

    async fn find(&self, id: i64) -> AppResult<PreventiveVisit> {
        let data = self.state.read().await;
        data.visits
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Visit {} not found", id)))
    }
}
