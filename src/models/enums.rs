//! Shared domain enums
//!
//! Each enum carries two spellings: the English serde name used on the API
//! surface, and the wire value fixed by the original store deployment
//! (Portuguese column values). `from_wire` is total: unknown store values
//! fall back to a safe default rather than failing a whole collection load.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// User role: administrators additionally manage user accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Technician,
}

impl Role {
    pub fn wire_value(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Technician => "tecnico",
        }
    }

    pub fn from_wire(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            _ => Role::Technician,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Role::Admin => "admin",
            Role::Technician => "technician",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MovementKind
// ---------------------------------------------------------------------------

/// Stock ledger entry direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    In,
    Out,
}

impl MovementKind {
    pub fn wire_value(&self) -> &'static str {
        match self {
            MovementKind::In => "entrada",
            MovementKind::Out => "saida",
        }
    }

    pub fn from_wire(s: &str) -> Self {
        match s {
            "entrada" => MovementKind::In,
            _ => MovementKind::Out,
        }
    }
}

// ---------------------------------------------------------------------------
// TicketStatus
// ---------------------------------------------------------------------------

/// Support ticket lifecycle state: pending -> in progress -> done (terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Pending,
    InProgress,
    Done,
}

impl TicketStatus {
    pub fn wire_value(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "pendente",
            TicketStatus::InProgress => "em_andamento",
            TicketStatus::Done => "concluido",
        }
    }

    pub fn from_wire(s: &str) -> Self {
        match s {
            "em_andamento" => TicketStatus::InProgress,
            "concluido" => TicketStatus::Done,
            _ => TicketStatus::Pending,
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TicketStatus::Pending => "pending",
            TicketStatus::InProgress => "in progress",
            TicketStatus::Done => "done",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// TicketPriority
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
}

impl TicketPriority {
    pub fn wire_value(&self) -> &'static str {
        match self {
            TicketPriority::Low => "baixa",
            TicketPriority::Medium => "media",
            TicketPriority::High => "alta",
        }
    }

    pub fn from_wire(s: &str) -> Self {
        match s {
            "baixa" => TicketPriority::Low,
            "alta" => TicketPriority::High,
            _ => TicketPriority::Medium,
        }
    }
}

// ---------------------------------------------------------------------------
// TicketKind
// ---------------------------------------------------------------------------

/// Problem category reported on a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TicketKind {
    Hardware,
    Software,
    Network,
    Peripheral,
}

impl TicketKind {
    pub fn wire_value(&self) -> &'static str {
        match self {
            TicketKind::Hardware => "hardware",
            TicketKind::Software => "software",
            TicketKind::Network => "rede",
            TicketKind::Peripheral => "periferico",
        }
    }

    pub fn from_wire(s: &str) -> Self {
        match s {
            "software" => TicketKind::Software,
            "rede" => TicketKind::Network,
            "periferico" => TicketKind::Peripheral,
            _ => TicketKind::Hardware,
        }
    }
}

impl std::fmt::Display for TicketKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TicketKind::Hardware => "hardware",
            TicketKind::Software => "software",
            TicketKind::Network => "network",
            TicketKind::Peripheral => "peripheral",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// VisitStatus
// ---------------------------------------------------------------------------

/// Preventive-maintenance visit state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VisitStatus {
    Pending,
    Done,
}

impl VisitStatus {
    pub fn wire_value(&self) -> &'static str {
        match self {
            VisitStatus::Pending => "pendente",
            VisitStatus::Done => "concluido",
        }
    }

    pub fn from_wire(s: &str) -> Self {
        match s {
            "concluido" => VisitStatus::Done,
            _ => VisitStatus::Pending,
        }
    }
}

impl std::fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            VisitStatus::Pending => "pending",
            VisitStatus::Done => "done",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentStatus {
    Working,
    Maintenance,
    Defective,
}

impl EquipmentStatus {
    pub fn wire_value(&self) -> &'static str {
        match self {
            EquipmentStatus::Working => "Funcionando",
            EquipmentStatus::Maintenance => "Manutenção",
            EquipmentStatus::Defective => "Defeito",
        }
    }

    pub fn from_wire(s: &str) -> Self {
        match s {
            "Manutenção" => EquipmentStatus::Maintenance,
            "Defeito" => EquipmentStatus::Defective,
            _ => EquipmentStatus::Working,
        }
    }
}
