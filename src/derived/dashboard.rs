//! Dashboard aggregation

use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::enums::{TicketStatus, VisitStatus};
use crate::models::{StockMovement, Ticket};
use crate::state::AppData;

const RECENT_ROWS: usize = 5;

/// Count and share of one ticket kind
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct KindSlice {
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardSummary {
    pub tickets_total: usize,
    pub tickets_pending: usize,
    pub tickets_in_progress: usize,
    pub tickets_done: usize,
    /// done / total * 100, one decimal; 0.0 when there are no tickets
    pub completion_rate: f64,
    /// Keyed by ticket kind, in first-seen collection order
    pub tickets_by_kind: IndexMap<String, KindSlice>,
    pub low_stock_items: usize,
    pub pending_visits: usize,
    pub recent_tickets: Vec<Ticket>,
    pub recent_movements: Vec<StockMovement>,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Histogram of ticket kinds, preserving the order kinds first appear in
/// the collection.
pub(crate) fn kind_histogram(tickets: &[Ticket]) -> IndexMap<String, KindSlice> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for ticket in tickets {
        *counts.entry(ticket.kind.to_string()).or_insert(0) += 1;
    }

    let total = tickets.len().max(1) as f64;
    counts
        .into_iter()
        .map(|(kind, count)| {
            let slice = KindSlice {
                count,
                percent: round1(count as f64 / total * 100.0),
            };
            (kind, slice)
        })
        .collect()
}

/// Derive the dashboard summary from the mirrored collections
pub fn build_dashboard(data: &AppData) -> DashboardSummary {
    let total = data.tickets.len();
    let count_status = |status: TicketStatus| {
        data.tickets.iter().filter(|t| t.status == status).count()
    };
    let done = count_status(TicketStatus::Done);

    DashboardSummary {
        tickets_total: total,
        tickets_pending: count_status(TicketStatus::Pending),
        tickets_in_progress: count_status(TicketStatus::InProgress),
        tickets_done: done,
        completion_rate: round1(done as f64 / total.max(1) as f64 * 100.0),
        tickets_by_kind: kind_histogram(&data.tickets),
        low_stock_items: data.inventory.iter().filter(|i| i.is_low_stock()).count(),
        pending_visits: data
            .visits
            .iter()
            .filter(|v| v.status == VisitStatus::Pending)
            .count(),
        recent_tickets: data.tickets.iter().rev().take(RECENT_ROWS).cloned().collect(),
        recent_movements: data
            .movements
            .iter()
            .rev()
            .take(RECENT_ROWS)
            .cloned()
            .collect(),
    }
}
