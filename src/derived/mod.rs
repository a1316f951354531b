//! Derived-state engine
//!
//! Everything in this module is a pure function over [`AppData`]: no I/O, no
//! caching, recomputed fresh on every call. Notifications, dashboard
//! aggregates, report rollups and search results are views over the mirrored
//! collections and are never persisted.
//!
//! [`AppData`]: crate::state::AppData

pub mod dashboard;
pub mod notifications;
pub mod reports;
pub mod search;

use serde::Serialize;
use utoipa::ToSchema;

pub use dashboard::{build_dashboard, DashboardSummary};
pub use notifications::{build_notifications, Notification, Severity};
pub use reports::{build_report, Report, ReportPeriod};
pub use search::{global_search, SearchHit, SearchOutcome};

/// Console module a derived entry points back to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Module {
    Inventory,
    Tickets,
    Maintenance,
    Equipment,
}
