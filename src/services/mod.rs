//! Business services
//!
//! Every mutating operation follows the same shape: validate the request,
//! round-trip through the record store, and only then merge the row the
//! store returned into the in-memory mirror. A failed store call leaves
//! local state untouched.

pub mod auth;
pub mod backup;
pub mod equipment;
pub mod inventory;
pub mod tickets;
pub mod users;
pub mod visits;

use crate::state::SharedState;
use crate::store::RecordStore;

/// Service container
pub struct Services {
    pub auth: auth::AuthService,
    pub users: users::UserService,
    pub inventory: inventory::InventoryService,
    pub tickets: tickets::TicketService,
    pub visits: visits::VisitService,
    pub equipment: equipment::EquipmentService,
    pub backup: backup::BackupService,
}

impl Services {
    pub fn new(store: RecordStore, state: SharedState) -> Self {
        Self {
            auth: auth::AuthService::new(state.clone()),
            users: users::UserService::new(store.clone(), state.clone()),
            inventory: inventory::InventoryService::new(store.clone(), state.clone()),
            tickets: tickets::TicketService::new(store.clone(), state.clone()),
            visits: visits::VisitService::new(store.clone(), state.clone()),
            equipment: equipment::EquipmentService::new(store, state.clone()),
            backup: backup::BackupService::new(state),
        }
    }
}
