//! Equipment model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::EquipmentStatus;

/// Wire row from the `equipamentos` table
#[derive(Debug, Clone, Deserialize)]
pub struct EquipmentRow {
    id: i64,
    patrimonio: String,
    nome: String,
    marca: Option<String>,
    modelo: Option<String>,
    localizacao: Option<String>,
    status: String,
    observacoes: Option<String>,
}

impl From<EquipmentRow> for Equipment {
    fn from(row: EquipmentRow) -> Self {
        Equipment {
            id: row.id,
            asset_tag: row.patrimonio,
            name: row.nome,
            brand: row.marca,
            model: row.modelo,
            location: row.localizacao,
            status: EquipmentStatus::from_wire(&row.status),
            observations: row.observacoes.unwrap_or_default(),
        }
    }
}

/// Write payload for the `equipamentos` table
#[derive(Debug, Clone, Serialize)]
pub struct EquipmentFields {
    pub patrimonio: String,
    pub nome: String,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub localizacao: Option<String>,
    pub status: String,
    pub observacoes: String,
}

impl From<&Equipment> for EquipmentFields {
    fn from(equipment: &Equipment) -> Self {
        EquipmentFields {
            patrimonio: equipment.asset_tag.clone(),
            nome: equipment.name.clone(),
            marca: equipment.brand.clone(),
            modelo: equipment.model.clone(),
            localizacao: equipment.location.clone(),
            status: equipment.status.wire_value().to_string(),
            observacoes: equipment.observations.clone(),
        }
    }
}

/// Tracked equipment unit; identity is carried primarily by the asset tag
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    pub id: i64,
    pub asset_tag: String,
    pub name: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub location: Option<String>,
    pub status: EquipmentStatus,
    pub observations: String,
}

/// Create/update equipment request (full field set)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EquipmentInput {
    #[validate(length(min = 1, message = "Asset tag must not be blank"))]
    pub asset_tag: String,
    #[validate(length(min = 1, message = "Name must not be blank"))]
    pub name: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub location: Option<String>,
    pub status: EquipmentStatus,
    #[serde(default)]
    pub observations: String,
}
