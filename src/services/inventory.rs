//! Stock items and the append-only movement ledger

use chrono::Local;
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::enums::MovementKind;
use crate::models::inventory::{
    InventoryItemFields, InventoryItemInput, MovementRequest, StockMovementFields,
};
use crate::models::{InventoryItem, StockMovement};
use crate::state::{remove_by_id, upsert_by_id, SharedState};
use crate::store::RecordStore;

/// Outcome of a registered movement: the ledger row plus the item it left behind
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MovementResult {
    pub movement: StockMovement,
    pub item: InventoryItem,
}

pub struct InventoryService {
    store: RecordStore,
    state: SharedState,
}

impl InventoryService {
    pub fn new(store: RecordStore, state: SharedState) -> Self {
        Self { store, state }
    }

    pub async fn list(&self) -> Vec<InventoryItem> {
        self.state.read().await.inventory.clone()
    }

    pub async fn list_movements(&self) -> Vec<StockMovement> {
        self.state.read().await.movements.clone()
    }

    pub async fn create(&self, input: InventoryItemInput) -> AppResult<InventoryItem> {
        input
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let item = self.store.insert_inventory_item(&fields(&input)).await?;
        let mut data = self.state.write().await;
        upsert_by_id(&mut data.inventory, item.clone(), |i| i.id);
        Ok(item)
    }

    pub async fn update(&self, id: i64, input: InventoryItemInput) -> AppResult<InventoryItem> {
        input
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.find(id).await?;

        let item = self.store.update_inventory_item(id, &fields(&input)).await?;
        let mut data = self.state.write().await;
        upsert_by_id(&mut data.inventory, item.clone(), |i| i.id);
        Ok(item)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.find(id).await?;
        self.store.delete_inventory_item(id).await?;
        let mut data = self.state.write().await;
        remove_by_id(&mut data.inventory, id, |i| i.id);
        Ok(())
    }

    /// Append a ledger row and adjust the item's running quantity.
    ///
    /// Two store writes, ledger first; the mirror is only updated once both
    /// succeed. Issues larger than the current quantity floor the item at
    /// zero rather than going negative.
    pub async fn register_movement(
        &self,
        item_id: i64,
        request: MovementRequest,
        responsible: &str,
    ) -> AppResult<MovementResult> {
        if request.quantity <= 0 {
            return Err(AppError::Validation(
                "Movement quantity must be positive".to_string(),
            ));
        }
        let item = self.find(item_id).await?;

        let new_quantity = match request.kind {
            MovementKind::In => item.quantity + request.quantity,
            MovementKind::Out => (item.quantity - request.quantity).max(0),
        };
        let reason = request.reason.filter(|r| !r.trim().is_empty()).unwrap_or_else(|| {
            match request.kind {
                MovementKind::In => "Manual intake",
                MovementKind::Out => "Manual issue",
            }
            .to_string()
        });

        let movement_fields = StockMovementFields {
            item_id,
            item: item.name.clone(),
            tipo: request.kind.wire_value().to_string(),
            quantidade: request.quantity,
            data: Local::now().date_naive(),
            responsavel: responsible.to_string(),
            motivo: reason,
        };
        let movement = self.store.insert_movement(&movement_fields).await?;

        let mut updated = item;
        updated.quantity = new_quantity;
        let stored_item = self
            .store
            .update_inventory_item(item_id, &InventoryItemFields::from(&updated))
            .await?;

        let mut data = self.state.write().await;
        data.movements.push(movement.clone());
        upsert_by_id(&mut data.inventory, stored_item.clone(), |i| i.id);
        Ok(MovementResult {
            movement,
            item: stored_item,
        })
    }

    async fn find(&self, id: i64) -> AppResult<InventoryItem> {
        let data = self.state.read().await;
        data.inventory
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Inventory item {} not found", id)))
    }
}

fn fields(input: &InventoryItemInput) -> InventoryItemFields {
    InventoryItemFields {
        nome: input.name.clone(),
        quantidade: input.quantity,
        minimo: input.minimum,
        localizacao: input.location.clone(),
        categoria: input.category.clone(),
    }
}
