//! Typed access to the `chamados` table

use crate::models::ticket::{TicketFields, TicketRow};
use crate::models::Ticket;

use super::{RecordStore, StoreError, TICKETS_TABLE};

impl RecordStore {
    pub async fn fetch_tickets(&self) -> Result<Vec<Ticket>, StoreError> {
        let rows: Vec<TicketRow> = self.fetch_all(TICKETS_TABLE).await?;
        Ok(rows.into_iter().map(Ticket::from).collect())
    }

    pub async fn insert_ticket(&self, fields: &TicketFields) -> Result<Ticket, StoreError> {
        let row: TicketRow = self.insert(TICKETS_TABLE, fields).await?;
        Ok(Ticket::from(row))
    }

    pub async fn update_ticket(
        &self,
        id: i64,
        fields: &TicketFields,
    ) -> Result<Ticket, StoreError> {
        let row: TicketRow = self.patch(TICKETS_TABLE, id, fields).await?;
        Ok(Ticket::from(row))
    }

    pub async fn delete_ticket(&self, id: i64) -> Result<(), StoreError> {
        self.remove(TICKETS_TABLE, id).await
    }
}
