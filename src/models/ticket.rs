//! Support ticket model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::{TicketKind, TicketPriority, TicketStatus};

/// Placeholder technician value used by the store before a ticket is claimed
pub const UNASSIGNED_TECHNICIAN: &str = "Não atribuído";

/// Wire row from the `chamados` table
#[derive(Debug, Clone, Deserialize)]
pub struct TicketRow {
    id: i64,
    titulo: String,
    sala: String,
    descricao: Option<String>,
    prioridade: String,
    tipo: String,
    foto: Option<String>,
    status: String,
    tecnico: Option<String>,
    data: NaiveDate,
    resolucao: Option<String>,
}

impl From<TicketRow> for Ticket {
    fn from(row: TicketRow) -> Self {
        Ticket {
            id: row.id,
            title: row.titulo,
            room: row.sala,
            description: row.descricao.unwrap_or_default(),
            priority: TicketPriority::from_wire(&row.prioridade),
            kind: TicketKind::from_wire(&row.tipo),
            photo: row.foto,
            status: TicketStatus::from_wire(&row.status),
            technician: row
                .tecnico
                .filter(|t| t != UNASSIGNED_TECHNICIAN),
            date: row.data,
            resolution: row.resolucao,
        }
    }
}

/// Write payload for the `chamados` table
#[derive(Debug, Clone, Serialize)]
pub struct TicketFields {
    pub titulo: String,
    pub sala: String,
    pub descricao: String,
    pub prioridade: String,
    pub tipo: String,
    pub foto: Option<String>,
    pub status: String,
    pub tecnico: String,
    pub data: NaiveDate,
    pub resolucao: Option<String>,
}

impl From<&Ticket> for TicketFields {
    fn from(ticket: &Ticket) -> Self {
        TicketFields {
            titulo: ticket.title.clone(),
            sala: ticket.room.clone(),
            descricao: ticket.description.clone(),
            prioridade: ticket.priority.wire_value().to_string(),
            tipo: ticket.kind.wire_value().to_string(),
            foto: ticket.photo.clone(),
            status: ticket.status.wire_value().to_string(),
            tecnico: ticket
                .technician
                .clone()
                .unwrap_or_else(|| UNASSIGNED_TECHNICIAN.to_string()),
            data: ticket.date,
            resolucao: ticket.resolution.clone(),
        }
    }
}

/// Support ticket.
///
/// `technician` is `None` until someone claims or starts the ticket; the
/// store encodes that as the unassigned sentinel value.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    pub room: String,
    pub description: String,
    pub priority: TicketPriority,
    pub kind: TicketKind,
    /// Optional inline (data-URL) photo of the problem
    pub photo: Option<String>,
    pub status: TicketStatus,
    pub technician: Option<String>,
    pub date: NaiveDate,
    pub resolution: Option<String>,
}

/// Create ticket request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTicket {
    #[validate(length(min = 1, message = "Title must not be blank"))]
    pub title: String,
    #[validate(length(min = 1, message = "Room must not be blank"))]
    pub room: String,
    #[serde(default)]
    pub description: String,
    pub priority: TicketPriority,
    pub kind: TicketKind,
    pub photo: Option<String>,
}

/// Update ticket request (editable fields only; lifecycle fields are
/// changed through the claim/start/resolve operations)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTicket {
    #[validate(length(min = 1, message = "Title must not be blank"))]
    pub title: String,
    #[validate(length(min = 1, message = "Room must not be blank"))]
    pub room: String,
    #[serde(default)]
    pub description: String,
    pub priority: TicketPriority,
    pub kind: TicketKind,
    pub photo: Option<String>,
}

/// Resolve ticket request
#[derive(Debug, Deserialize, ToSchema)]
pub struct ResolveTicket {
    pub resolution: String,
}
