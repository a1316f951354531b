//! In-memory mirror of the store collections
//!
//! The whole dataset is small enough to hold in memory. All six collections
//! are loaded once at startup and kept in sync by the services: every
//! mutation round-trips through the store first and only then replaces the
//! local entry with the row the store returned, so the mirror always holds
//! store-canonical data.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;

use crate::models::{Equipment, InventoryItem, PreventiveVisit, StockMovement, Ticket, User};
use crate::store::RecordStore;

pub type SharedState = Arc<RwLock<AppData>>;

/// All collections mirrored from the record store
#[derive(Debug, Default, Clone)]
pub struct AppData {
    pub users: Vec<User>,
    pub inventory: Vec<InventoryItem>,
    pub movements: Vec<StockMovement>,
    pub tickets: Vec<Ticket>,
    pub visits: Vec<PreventiveVisit>,
    pub equipment: Vec<Equipment>,
}

impl AppData {
    /// Load every collection from the store concurrently.
    ///
    /// The load is best-effort per collection: a failed table leaves that
    /// collection empty instead of aborting startup, matching the behavior
    /// of a console that stays usable when one table is unreachable.
    pub async fn load(store: &RecordStore) -> Self {
        let (users, inventory, movements, tickets, visits, equipment) = tokio::join!(
            store.fetch_users(),
            store.fetch_inventory(),
            store.fetch_movements(),
            store.fetch_tickets(),
            store.fetch_visits(),
            store.fetch_equipment(),
        );

        fn or_empty<T>(table: &str, result: Result<Vec<T>, crate::store::StoreError>) -> Vec<T> {
            match result {
                Ok(rows) => rows,
                Err(e) => {
                    warn!(table, error = %e, "failed to load collection, starting empty");
                    Vec::new()
                }
            }
        }

        Self {
            users: or_empty("usuarios", users),
            inventory: or_empty("estoque", inventory),
            movements: or_empty("historico_estoque", movements),
            tickets: or_empty("chamados", tickets),
            visits: or_empty("preventivas", visits),
            equipment: or_empty("equipamentos", equipment),
        }
    }
}

/// Replace the entry with the same id, or append when it is new
pub fn upsert_by_id<T, F>(items: &mut Vec<T>, entry: T, id_of: F)
where
    F: Fn(&T) -> i64,
{
    let id = id_of(&entry);
    match items.iter_mut().find(|i| id_of(i) == id) {
        Some(slot) => *slot = entry,
        None => items.push(entry),
    }
}

/// Drop the entry with the given id; returns whether anything was removed
pub fn remove_by_id<T, F>(items: &mut Vec<T>, id: i64, id_of: F) -> bool
where
    F: Fn(&T) -> i64,
{
    let before = items.len();
    items.retain(|i| id_of(i) != id);
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Entry {
        id: i64,
        value: &'static str,
    }

    #[test]
    fn upsert_replaces_existing_entry_in_place() {
        let mut items = vec![
            Entry { id: 1, value: "a" },
            Entry { id: 2, value: "b" },
            Entry { id: 3, value: "c" },
        ];

        upsert_by_id(&mut items, Entry { id: 2, value: "patched" }, |e| e.id);

        assert_eq!(items.len(), 3);
        assert_eq!(items[1], Entry { id: 2, value: "patched" });
    }

    #[test]
    fn upsert_appends_unknown_id() {
        let mut items = vec![Entry { id: 1, value: "a" }];

        upsert_by_id(&mut items, Entry { id: 9, value: "new" }, |e| e.id);

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, 9);
    }

    #[test]
    fn remove_reports_whether_anything_matched() {
        let mut items = vec![Entry { id: 1, value: "a" }, Entry { id: 2, value: "b" }];

        assert!(remove_by_id(&mut items, 1, |e| e.id));
        assert!(!remove_by_id(&mut items, 99, |e| e.id));
        assert_eq!(items.len(), 1);
    }
}
