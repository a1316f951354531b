//! Notification derivation
//!
//! Notifications are recomputed from the collections on every request. Ids
//! are stable (`inventory-{id}`, `ticket-{id}`, `visit-{id}`) so a client
//! can track read/unread state across refreshes; nothing is stored here.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::enums::{TicketStatus, VisitStatus};
use crate::state::AppData;

use super::Module;

/// Days an unfinished ticket may sit before it is flagged as urgent
const STALE_TICKET_DAYS: i64 = 3;

/// Days ahead a pending visit shows up as a reminder
const UPCOMING_VISIT_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Urgent,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Notification {
    pub id: String,
    pub level: Severity,
    pub message: String,
    pub module: Module,
}

/// Derive the current notification list: low stock, stale tickets, and
/// upcoming preventive visits, in that order.
pub fn build_notifications(data: &AppData, today: NaiveDate) -> Vec<Notification> {
    let mut notifications = Vec::new();

    for item in data.inventory.iter().filter(|i| i.is_low_stock()) {
        notifications.push(Notification {
            id: format!("inventory-{}", item.id),
            level: Severity::Warning,
            message: format!(
                "Low stock: {} is at {} (minimum {})",
                item.name, item.quantity, item.minimum
            ),
            module: Module::Inventory,
        });
    }

    for ticket in data
        .tickets
        .iter()
        .filter(|t| t.status != TicketStatus::Done)
    {
        let days_open = (today - ticket.date).num_days();
        if days_open >= STALE_TICKET_DAYS {
            notifications.push(Notification {
                id: format!("ticket-{}", ticket.id),
                level: Severity::Urgent,
                message: format!(
                    "Ticket \"{}\" ({}) open for {} days",
                    ticket.title, ticket.room, days_open
                ),
                module: Module::Tickets,
            });
        }
    }

    for visit in data
        .visits
        .iter()
        .filter(|v| v.status == VisitStatus::Pending)
    {
        let days_ahead = (visit.date - today).num_days();
        if (0..=UPCOMING_VISIT_DAYS).contains(&days_ahead) {
            notifications.push(Notification {
                id: format!("visit-{}", visit.id),
                level: Severity::Info,
                message: format!(
                    "Preventive visit for {} scheduled on {}",
                    visit.room, visit.date
                ),
                module: Module::Maintenance,
            });
        }
    }

    notifications
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{TicketKind, TicketPriority};
    use crate::models::{InventoryItem, PreventiveVisit, Ticket};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn item(id: i64, quantity: i64, minimum: i64) -> InventoryItem {
        InventoryItem {
            id,
            name: format!("Item {}", id),
            quantity,
            minimum,
            location: None,
            category: None,
        }
    }

    fn ticket(id: i64, status: TicketStatus, opened: &str) -> Ticket {
        Ticket {
            id,
            title: format!("Ticket {}", id),
            room: "101".to_string(),
            description: String::new(),
            priority: TicketPriority::Medium,
            kind: TicketKind::Hardware,
            photo: None,
            status,
            technician: None,
            date: date(opened),
            resolution: None,
        }
    }

    fn visit(id: i64, status: VisitStatus, scheduled: &str) -> PreventiveVisit {
        PreventiveVisit {
            id,
            room: "Lab".to_string(),
            date: date(scheduled),
            technician: "Alex".to_string(),
            status,
            observations: String::new(),
        }
    }

    #[test]
    fn quantity_equal_to_minimum_is_low_stock() {
        let data = AppData {
            inventory: vec![item(1, 5, 5), item(2, 6, 5)],
            ..Default::default()
        };

        let notifications = build_notifications(&data, date("2024-03-10"));

        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].id, "inventory-1");
        assert_eq!(notifications[0].level, Severity::Warning);
        assert_eq!(notifications[0].module, Module::Inventory);
    }

    #[test]
    fn ticket_opened_today_is_not_urgent() {
        let today = date("2024-03-10");
        let data = AppData {
            tickets: vec![ticket(1, TicketStatus::Pending, "2024-03-10")],
            ..Default::default()
        };

        assert!(build_notifications(&data, today).is_empty());
    }

    #[test]
    fn unfinished_ticket_backdated_four_days_is_urgent_with_count() {
        let today = date("2024-03-10");
        let data = AppData {
            tickets: vec![ticket(7, TicketStatus::InProgress, "2024-03-06")],
            ..Default::default()
        };

        let notifications = build_notifications(&data, today);

        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].id, "ticket-7");
        assert_eq!(notifications[0].level, Severity::Urgent);
        assert!(notifications[0].message.contains("4 days"));
    }

    #[test]
    fn done_tickets_never_notify() {
        let data = AppData {
            tickets: vec![ticket(1, TicketStatus::Done, "2024-01-01")],
            ..Default::default()
        };

        assert!(build_notifications(&data, date("2024-03-10")).is_empty());
    }

    #[test]
    fn visit_window_is_inclusive_on_both_ends() {
        let today = date("2024-03-10");
        let data = AppData {
            visits: vec![
                visit(1, VisitStatus::Pending, "2024-03-10"),
                visit(2, VisitStatus::Pending, "2024-03-17"),
                visit(3, VisitStatus::Pending, "2024-03-18"),
                visit(4, VisitStatus::Pending, "2024-03-09"),
                visit(5, VisitStatus::Done, "2024-03-12"),
            ],
            ..Default::default()
        };

        let notifications = build_notifications(&data, today);

        let ids: Vec<&str> = notifications.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["visit-1", "visit-2"]);
        assert!(notifications.iter().all(|n| n.level == Severity::Info));
    }
}
