//! Typed access to the `preventivas` table

use crate::models::visit::{PreventiveVisitFields, PreventiveVisitRow};
use crate::models::PreventiveVisit;

use super::{RecordStore, StoreError, VISITS_TABLE};

impl RecordStore {
    pub async fn fetch_visits(&self) -> Result<Vec<PreventiveVisit>, StoreError> {
        let rows: Vec<PreventiveVisitRow> = self.fetch_all(VISITS_TABLE).await?;
        Ok(rows.into_iter().map(PreventiveVisit::from).collect())
    }

    pub async fn insert_visit(
        &self,
        fields: &PreventiveVisitFields,
    ) -> Result<PreventiveVisit, StoreError> {
        let row: PreventiveVisitRow = self.insert(VISITS_TABLE, fields).await?;
        Ok(PreventiveVisit::from(row))
    }

    pub async fn update_visit(
        &self,
        id: i64,
        fields: &PreventiveVisitFields,
    ) -> Result<PreventiveVisit, StoreError> {
        let row: PreventiveVisitRow = self.patch(VISITS_TABLE, id, fields).await?;
        Ok(PreventiveVisit::from(row))
    }

    pub async fn delete_visit(&self, id: i64) -> Result<(), StoreError> {
        self.remove(VISITS_TABLE, id).await
    }
}
