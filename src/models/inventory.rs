//! Inventory item and stock movement models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::MovementKind;

/// Wire row from the `estoque` table
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryItemRow {
    id: i64,
    nome: String,
    quantidade: i64,
    minimo: i64,
    localizacao: Option<String>,
    categoria: Option<String>,
}

impl From<InventoryItemRow> for InventoryItem {
    fn from(row: InventoryItemRow) -> Self {
        InventoryItem {
            id: row.id,
            name: row.nome,
            quantity: row.quantidade,
            minimum: row.minimo,
            location: row.localizacao,
            category: row.categoria,
        }
    }
}

/// Write payload for the `estoque` table
#[derive(Debug, Clone, Serialize)]
pub struct InventoryItemFields {
    pub nome: String,
    pub quantidade: i64,
    pub minimo: i64,
    pub localizacao: Option<String>,
    pub categoria: Option<String>,
}

impl From<&InventoryItem> for InventoryItemFields {
    fn from(item: &InventoryItem) -> Self {
        InventoryItemFields {
            nome: item.name.clone(),
            quantidade: item.quantity,
            minimo: item.minimum,
            localizacao: item.location.clone(),
            categoria: item.category.clone(),
        }
    }
}

/// Consumable stock item.
///
/// The running quantity is stored on the item itself and adjusted at
/// movement time; it is not recomputed from the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub minimum: i64,
    pub location: Option<String>,
    pub category: Option<String>,
}

impl InventoryItem {
    /// Low stock: at or below the configured minimum
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.minimum
    }
}

/// Wire row from the `historico_estoque` table
#[derive(Debug, Clone, Deserialize)]
pub struct StockMovementRow {
    id: i64,
    item_id: i64,
    item: String,
    tipo: String,
    quantidade: i64,
    data: NaiveDate,
    responsavel: String,
    motivo: String,
}

impl From<StockMovementRow> for StockMovement {
    fn from(row: StockMovementRow) -> Self {
        StockMovement {
            id: row.id,
            item_id: row.item_id,
            item_name: row.item,
            kind: MovementKind::from_wire(&row.tipo),
            quantity: row.quantidade,
            date: row.data,
            responsible: row.responsavel,
            reason: row.motivo,
        }
    }
}

/// Write payload for the `historico_estoque` table
#[derive(Debug, Clone, Serialize)]
pub struct StockMovementFields {
    pub item_id: i64,
    pub item: String,
    pub tipo: String,
    pub quantidade: i64,
    pub data: NaiveDate,
    pub responsavel: String,
    pub motivo: String,
}

/// Append-only ledger entry for a stock quantity change
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StockMovement {
    pub id: i64,
    pub item_id: i64,
    pub item_name: String,
    pub kind: MovementKind,
    pub quantity: i64,
    pub date: NaiveDate,
    pub responsible: String,
    pub reason: String,
}

/// Create/update inventory item request (full field set)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct InventoryItemInput {
    #[validate(length(min = 1, message = "Item name must not be blank"))]
    pub name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub minimum: i64,
    pub location: Option<String>,
    pub category: Option<String>,
}

/// Register stock movement request
#[derive(Debug, Deserialize, ToSchema)]
pub struct MovementRequest {
    pub kind: MovementKind,
    pub quantity: i64,
    /// Defaults to "Manual intake" / "Manual issue" depending on the kind
    pub reason: Option<String>,
}
