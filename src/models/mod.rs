//! Domain models
//!
//! Each entity comes in three shapes: the `*Row` wire struct exactly as the
//! remote store returns it (the store keeps the original deployment's
//! Portuguese column names), the domain struct served on the API, and the
//! `*Fields` write payload (every column except the store-assigned `id`).

pub mod enums;
pub mod equipment;
pub mod inventory;
pub mod ticket;
pub mod user;
pub mod visit;

pub use equipment::Equipment;
pub use inventory::{InventoryItem, StockMovement};
pub use ticket::Ticket;
pub use user::User;
pub use visit::PreventiveVisit;
