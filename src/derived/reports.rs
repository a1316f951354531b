//! Report rollups
//!
//! A report covers an optional inclusive date window and aggregates tickets,
//! stock movements and visits inside it. The low-stock table is a snapshot
//! of current quantities and deliberately ignores the window.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::enums::{MovementKind, TicketStatus, VisitStatus};
use crate::models::{InventoryItem, StockMovement, Ticket};
use crate::state::AppData;

use super::dashboard::{kind_histogram, KindSlice};

const MAX_TICKET_ROWS: usize = 50;
const MAX_MOVEMENT_ROWS: usize = 100;

/// Inclusive report window; an unset bound is open on that side
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct ReportPeriod {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl ReportPeriod {
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TicketTotals {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub done: usize,
    pub by_kind: IndexMap<String, KindSlice>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StockTotals {
    pub movements: usize,
    pub total_in: i64,
    pub total_out: i64,
    /// Current low-stock items, regardless of the report window
    pub low_stock: Vec<InventoryItem>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VisitTotals {
    pub total: usize,
    pub done: usize,
    pub pending: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Report {
    pub period: ReportPeriod,
    pub tickets: TicketTotals,
    pub stock: StockTotals,
    pub visits: VisitTotals,
    /// In-window tickets, collection order, first 50
    pub ticket_rows: Vec<Ticket>,
    /// In-window movements, collection order, first 100
    pub movement_rows: Vec<StockMovement>,
}

/// Roll the mirrored collections up into a report for the given window
pub fn build_report(data: &AppData, period: ReportPeriod) -> Report {
    let tickets: Vec<Ticket> = data
        .tickets
        .iter()
        .filter(|t| period.contains(t.date))
        .cloned()
        .collect();
    let movements: Vec<StockMovement> = data
        .movements
        .iter()
        .filter(|m| period.contains(m.date))
        .cloned()
        .collect();
    let visits: Vec<_> = data
        .visits
        .iter()
        .filter(|v| period.contains(v.date))
        .collect();

    let count_status = |status: TicketStatus| {
        tickets.iter().filter(|t| t.status == status).count()
    };
    let sum_kind = |kind: MovementKind| {
        movements
            .iter()
            .filter(|m| m.kind == kind)
            .map(|m| m.quantity)
            .sum()
    };
    let visits_done = visits.iter().filter(|v| v.status == VisitStatus::Done).count();

    Report {
        period,
        tickets: TicketTotals {
            total: tickets.len(),
            pending: count_status(TicketStatus::Pending),
            in_progress: count_status(TicketStatus::InProgress),
            done: count_status(TicketStatus::Done),
            by_kind: kind_histogram(&tickets),
        },
        stock: StockTotals {
            movements: movements.len(),
            total_in: sum_kind(MovementKind::In),
            total_out: sum_kind(MovementKind::Out),
            low_stock: data
                .inventory
                .iter()
                .filter(|i| i.is_low_stock())
                .cloned()
                .collect(),
        },
        visits: VisitTotals {
            total: visits.len(),
            done: visits_done,
            pending: visits.len() - visits_done,
        },
        ticket_rows: tickets.into_iter().take(MAX_TICKET_ROWS).collect(),
        movement_rows: movements.into_iter().take(MAX_MOVEMENT_ROWS).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{TicketKind, TicketPriority};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn ticket(id: i64, opened: &str) -> Ticket {
        Ticket {
            id,
            title: format!("Ticket {}", id),
            room: "101".to_string(),
            description: String::new(),
            priority: TicketPriority::Medium,
            kind: TicketKind::Hardware,
            photo: None,
            status: TicketStatus::Pending,
            technician: None,
            date: date(opened),
            resolution: None,
        }
    }

    fn movement(id: i64, kind: MovementKind, quantity: i64, on: &str) -> StockMovement {
        StockMovement {
            id,
            item_id: 1,
            item_name: "Cable".to_string(),
            kind,
            quantity,
            date: date(on),
            responsible: "Alex".to_string(),
            reason: "Manual intake".to_string(),
        }
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let data = AppData {
            tickets: vec![
                ticket(1, "2024-02-29"),
                ticket(2, "2024-03-01"),
                ticket(3, "2024-03-31"),
                ticket(4, "2024-04-01"),
            ],
            ..Default::default()
        };
        let period = ReportPeriod {
            start: Some(date("2024-03-01")),
            end: Some(date("2024-03-31")),
        };

        let report = build_report(&data, period);

        let ids: Vec<i64> = report.ticket_rows.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(report.tickets.total, 2);
    }

    #[test]
    fn open_period_includes_everything() {
        let data = AppData {
            tickets: vec![ticket(1, "2020-01-01"), ticket(2, "2030-12-31")],
            ..Default::default()
        };

        let report = build_report(&data, ReportPeriod::default());

        assert_eq!(report.tickets.total, 2);
    }

    #[test]
    fn stock_totals_sum_by_direction() {
        let data = AppData {
            movements: vec![
                movement(1, MovementKind::In, 10, "2024-03-05"),
                movement(2, MovementKind::Out, 4, "2024-03-06"),
                movement(3, MovementKind::In, 2, "2024-03-07"),
            ],
            ..Default::default()
        };

        let report = build_report(&data, ReportPeriod::default());

        assert_eq!(report.stock.total_in, 12);
        assert_eq!(report.stock.total_out, 4);
        assert_eq!(report.stock.movements, 3);
    }

    #[test]
    fn low_stock_table_ignores_the_window() {
        let data = AppData {
            inventory: vec![InventoryItem {
                id: 1,
                name: "Toner".to_string(),
                quantity: 1,
                minimum: 3,
                location: None,
                category: None,
            }],
            ..Default::default()
        };
        let period = ReportPeriod {
            start: Some(date("1999-01-01")),
            end: Some(date("1999-01-02")),
        };

        let report = build_report(&data, period);

        assert_eq!(report.stock.low_stock.len(), 1);
    }

    #[test]
    fn ticket_rows_are_capped_at_fifty() {
        let tickets: Vec<Ticket> = (1..=60).map(|id| ticket(id, "2024-03-10")).collect();
        let data = AppData {
            tickets,
            ..Default::default()
        };

        let report = build_report(&data, ReportPeriod::default());

        assert_eq!(report.ticket_rows.len(), 50);
        assert_eq!(report.tickets.total, 60);
        assert_eq!(report.ticket_rows[0].id, 1);
    }
}
