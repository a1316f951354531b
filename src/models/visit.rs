//! Preventive-maintenance visit model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::VisitStatus;

/// Wire row from the `preventivas` table
#[derive(Debug, Clone, Deserialize)]
pub struct PreventiveVisitRow {
    id: i64,
    sala: String,
    data: NaiveDate,
    tecnico: String,
    status: String,
    observacoes: Option<String>,
}

impl From<PreventiveVisitRow> for PreventiveVisit {
    fn from(row: PreventiveVisitRow) -> Self {
        PreventiveVisit {
            id: row.id,
            room: row.sala,
            date: row.data,
            technician: row.tecnico,
            status: VisitStatus::from_wire(&row.status),
            observations: row.observacoes.unwrap_or_default(),
        }
    }
}

/// Write payload for the `preventivas` table
#[derive(Debug, Clone, Serialize)]
pub struct PreventiveVisitFields {
    pub sala: String,
    pub data: NaiveDate,
    pub tecnico: String,
    pub status: String,
    pub observacoes: String,
}

impl From<&PreventiveVisit> for PreventiveVisitFields {
    fn from(visit: &PreventiveVisit) -> Self {
        PreventiveVisitFields {
            sala: visit.room.clone(),
            data: visit.date,
            tecnico: visit.technician.clone(),
            status: visit.status.wire_value().to_string(),
            observacoes: visit.observations.clone(),
        }
    }
}

/// Scheduled preventive-maintenance visit.
///
/// Completion collapses the checklist into the `observations` text; the
/// granular checklist state is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PreventiveVisit {
    pub id: i64,
    pub room: String,
    pub date: NaiveDate,
    pub technician: String,
    pub status: VisitStatus,
    pub observations: String,
}

/// Schedule visit request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateVisit {
    #[validate(length(min = 1, message = "Room must not be blank"))]
    pub room: String,
    pub date: NaiveDate,
    /// Defaults to the acting user
    pub technician: Option<String>,
}

/// Completion checklist: a fixed set of inspected sub-items plus a free note
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct Checklist {
    #[serde(default)]
    pub computers: bool,
    #[serde(default)]
    pub monitors: bool,
    #[serde(default)]
    pub keyboards: bool,
    #[serde(default)]
    pub mice: bool,
    #[serde(default)]
    pub network: bool,
    #[serde(default)]
    pub cleaning: bool,
    #[serde(default)]
    pub note: String,
}

impl Checklist {
    /// Collapse the checklist into the persisted observations text
    pub fn to_observations(&self) -> String {
        let mut checked = Vec::new();
        for (on, label) in [
            (self.computers, "computers"),
            (self.monitors, "monitors"),
            (self.keyboards, "keyboards"),
            (self.mice, "mice"),
            (self.network, "network"),
            (self.cleaning, "cleaning"),
        ] {
            if on {
                checked.push(label);
            }
        }

        let items = if checked.is_empty() {
            "no items checked".to_string()
        } else {
            checked.join(", ")
        };

        let note = self.note.trim();
        if note.is_empty() {
            format!("Checklist: {}.", items)
        } else {
            format!("Checklist: {}. {}", items, note)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_items_join_in_fixed_order() {
        let checklist = Checklist {
            computers: true,
            network: true,
            cleaning: true,
            ..Default::default()
        };

        assert_eq!(
            checklist.to_observations(),
            "Checklist: computers, network, cleaning."
        );
    }

    #[test]
    fn empty_checklist_still_produces_text() {
        assert_eq!(
            Checklist::default().to_observations(),
            "Checklist: no items checked."
        );
    }

    #[test]
    fn note_is_appended_after_the_items() {
        let checklist = Checklist {
            monitors: true,
            note: "  replaced one HDMI cable  ".to_string(),
            ..Default::default()
        };

        assert_eq!(
            checklist.to_observations(),
            "Checklist: monitors. replaced one HDMI cable"
        );
    }
}
