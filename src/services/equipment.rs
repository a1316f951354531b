//! Equipment registry

use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::equipment::{EquipmentFields, EquipmentInput};
use crate::models::Equipment;
use crate::state::{remove_by_id, upsert_by_id, SharedState};
use crate::store::RecordStore;

pub struct EquipmentService {
    store: RecordStore,
    state: SharedState,
}

impl EquipmentService {
    pub fn new(store: RecordStore, state: SharedState) -> Self {
        Self { store, state }
    }

    pub async fn list(&self) -> Vec<Equipment> {
        self.state.read().await.equipment.clone()
    }

    pub async fn create(&self, input: EquipmentInput) -> AppResult<Equipment> {
        input
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let equipment = self.store.insert_equipment(&fields(&input)).await?;
        let mut data = self.state.write().await;
        upsert_by_id(&mut data.equipment, equipment.clone(), |e| e.id);
        Ok(equipment)
    }

    pub async fn update(&self, id: i64, input: EquipmentInput) -> AppResult<Equipment> {
        input
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.find(id).await?;

        let equipment = self.store.update_equipment(id, &fields(&input)).await?;
        let mut data = self.state.write().await;
        upsert_by_id(&mut data.equipment, equipment.clone(), |e| e.id);
        Ok(equipment)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.find(id).await?;
        self.store.delete_equipment(id).await?;
        let mut data = self.state.write().await;
        remove_by_id(&mut data.equipment, id, |e| e.id);
        Ok(())
    }

    async fn find(&self, id: i64) -> AppResult<Equipment> {
        let data = self.state.read().await;
        data.equipment
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }
}

fn fields(input: &EquipmentInput) -> EquipmentFields {
    EquipmentFields {
        patrimonio: input.asset_tag.clone(),
        nome: input.name.clone(),
        marca: input.brand.clone(),
        modelo: input.model.clone(),
        localizacao: input.location.clone(),
        status: input.status.wire_value().to_string(),
        observacoes: input.observations.clone(),
    }
}
