//! Support ticket lifecycle
//!
//! Transitions form a closed state machine enforced here, not by the store:
//! pending -> in progress -> done, with done terminal. Editable fields move
//! through `update`; lifecycle fields only move through claim/start/resolve.

use chrono::Local;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::enums::TicketStatus;
use crate::models::ticket::{CreateTicket, ResolveTicket, TicketFields, UpdateTicket};
use crate::models::{Ticket, User};
use crate::state::{remove_by_id, upsert_by_id, SharedState};
use crate::store::RecordStore;

pub struct TicketService {
    store: RecordStore,
    state: SharedState,
}

impl TicketService {
    pub fn new(store: RecordStore, state: SharedState) -> Self {
        Self { store, state }
    }

    pub async fn list(&self) -> Vec<Ticket> {
        self.state.read().await.tickets.clone()
    }

    pub async fn create(&self, input: CreateTicket) -> AppResult<Ticket> {
        input
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let ticket = Ticket {
            id: 0, // assigned by the store
            title: input.title,
            room: input.room,
            description: input.description,
            priority: input.priority,
            kind: input.kind,
            photo: input.photo,
            status: TicketStatus::Pending,
            technician: None,
            date: Local::now().date_naive(),
            resolution: None,
        };
        let stored = self.store.insert_ticket(&TicketFields::from(&ticket)).await?;

        let mut data = self.state.write().await;
        upsert_by_id(&mut data.tickets, stored.clone(), |t| t.id);
        Ok(stored)
    }

    pub async fn update(&self, id: i64, input: UpdateTicket) -> AppResult<Ticket> {
        input
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let mut ticket = self.find(id).await?;
        ticket.title = input.title;
        ticket.room = input.room;
        ticket.description = input.description;
        ticket.priority = input.priority;
        ticket.kind = input.kind;
        ticket.photo = input.photo;

        self.persist(ticket).await
    }

    /// Take the ticket on: pending -> in progress, the acting user becomes
    /// the technician when nobody is assigned yet.
    pub async fn claim(&self, id: i64, acting: &User) -> AppResult<Ticket> {
        self.begin(id, acting).await
    }

    /// Start work: same transition as claim; kept as a distinct operation
    /// because clients trigger it from the status control rather than the
    /// assignment control.
    pub async fn start(&self, id: i64, acting: &User) -> AppResult<Ticket> {
        self.begin(id, acting).await
    }

    async fn begin(&self, id: i64, acting: &User) -> AppResult<Ticket> {
        let mut ticket = self.find(id).await?;
        match ticket.status {
            TicketStatus::Pending => {}
            TicketStatus::InProgress => {
                return Err(AppError::BusinessRule(format!(
                    "Ticket {} is already in progress",
                    id
                )))
            }
            TicketStatus::Done => {
                return Err(AppError::BusinessRule(format!(
                    "Ticket {} is done and cannot be reopened",
                    id
                )))
            }
        }

        ticket.status = TicketStatus::InProgress;
        if ticket.technician.is_none() {
            ticket.technician = Some(acting.name.clone());
        }
        self.persist(ticket).await
    }

    /// Close out: in progress -> done, with a mandatory resolution text
    pub async fn resolve(&self, id: i64, input: ResolveTicket) -> AppResult<Ticket> {
        if input.resolution.trim().is_empty() {
            return Err(AppError::Validation(
                "Resolution text must not be blank".to_string(),
            ));
        }

        let mut ticket = self.find(id).await?;
        match ticket.status {
            TicketStatus::InProgress => {}
            TicketStatus::Pending => {
                return Err(AppError::BusinessRule(format!(
                    "Ticket {} must be in progress before it can be resolved",
                    id
                )))
            }
            TicketStatus::Done => {
                return Err(AppError::BusinessRule(format!(
                    "Ticket {} is already done",
                    id
                )))
            }
        }

        ticket.status = TicketStatus::Done;
        ticket.resolution = Some(input.resolution.trim().to_string());
        self.persist(ticket).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.find(id).await?;
        self.store.delete_ticket(id).await?;
        let mut data = self.state.write().await;
        remove_by_id(&mut data.tickets, id, |t| t.id);
        Ok(())
    }

    async fn persist(&self, ticket: Ticket) -> AppResult<Ticket> {
        let stored = self
            .store
            .update_ticket(ticket.id, &TicketFields::from(&ticket))
            .await?;
        let mut data = self.state.write().await;
        upsert_by_id(&mut data.tickets, stored.clone(), |t| t.id);
        Ok(stored)
    }

    async fn find(&self, id: i64) -> AppResult<Ticket> {
        let data = self.state.read().await;
        data.tickets
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Ticket {} not found", id)))
    }
}
