//! Typed access to the `estoque` and `historico_estoque` tables

use crate::models::inventory::{
    InventoryItemFields, InventoryItemRow, StockMovementFields, StockMovementRow,
};
use crate::models::{InventoryItem, StockMovement};

use super::{RecordStore, StoreError, INVENTORY_TABLE, MOVEMENTS_TABLE};

impl RecordStore {
    pub async fn fetch_inventory(&self) -> Result<Vec<InventoryItem>, StoreError> {
        let rows: Vec<InventoryItemRow> = self.fetch_all(INVENTORY_TABLE).await?;
        Ok(rows.into_iter().map(InventoryItem::from).collect())
    }

    pub async fn insert_inventory_item(
        &self,
        fields: &InventoryItemFields,
    ) -> Result<InventoryItem, StoreError> {
        let row: InventoryItemRow = self.insert(INVENTORY_TABLE, fields).await?;
        Ok(InventoryItem::from(row))
    }

    pub async fn update_inventory_item(
        &self,
        id: i64,
        fields: &InventoryItemFields,
    ) -> Result<InventoryItem, StoreError> {
        let row: InventoryItemRow = self.patch(INVENTORY_TABLE, id, fields).await?;
        Ok(InventoryItem::from(row))
    }

    pub async fn delete_inventory_item(&self, id: i64) -> Result<(), StoreError> {
        self.remove(INVENTORY_TABLE, id).await
    }

    pub async fn fetch_movements(&self) -> Result<Vec<StockMovement>, StoreError> {
        let rows: Vec<StockMovementRow> = self.fetch_all(MOVEMENTS_TABLE).await?;
        Ok(rows.into_iter().map(StockMovement::from).collect())
    }

    pub async fn insert_movement(
        &self,
        fields: &StockMovementFields,
    ) -> Result<StockMovement, StoreError> {
        let row: StockMovementRow = self.insert(MOVEMENTS_TABLE, fields).await?;
        Ok(StockMovement::from(row))
    }
}
