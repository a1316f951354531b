//! Typed access to the `equipamentos` table

use crate::models::equipment::{EquipmentFields, EquipmentRow};
use crate::models::Equipment;

use super::{RecordStore, StoreError, EQUIPMENT_TABLE};

impl RecordStore {
    pub async fn fetch_equipment(&self) -> Result<Vec<Equipment>, StoreError> {
        let rows: Vec<EquipmentRow> = self.fetch_all(EQUIPMENT_TABLE).await?;
        Ok(rows.into_iter().map(Equipment::from).collect())
    }

    pub async fn insert_equipment(
        &self,
        fields: &EquipmentFields,
    ) -> Result<Equipment, StoreError> {
        let row: EquipmentRow = self.insert(EQUIPMENT_TABLE, fields).await?;
        Ok(Equipment::from(row))
    }

    pub async fn update_equipment(
        &self,
        id: i64,
        fields: &EquipmentFields,
    ) -> Result<Equipment, StoreError> {
        let row: EquipmentRow = self.patch(EQUIPMENT_TABLE, id, fields).await?;
        Ok(Equipment::from(row))
    }

    pub async fn delete_equipment(&self, id: i64) -> Result<(), StoreError> {
        self.remove(EQUIPMENT_TABLE, id).await
    }
}
