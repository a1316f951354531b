//! Global search across tickets, inventory, visits and equipment

use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppData;

use super::Module;

/// Queries shorter than this are rejected outright, not searched
pub const MIN_QUERY_LEN: usize = 2;

const MAX_HITS_PER_KIND: usize = 10;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchHit {
    pub module: Module,
    pub id: i64,
    pub label: String,
    pub detail: String,
}

/// Search outcome; a too-short query is distinct from an empty result set
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    TooShort,
    Results { hits: Vec<SearchHit> },
}

fn matches(query: &str, fields: &[&str]) -> bool {
    fields
        .iter()
        .any(|f| f.to_lowercase().contains(query))
}

/// Case-insensitive substring search over the display fields of each
/// collection, capped per kind, concatenated tickets then inventory then
/// visits then equipment. No ranking, no dedup.
pub fn global_search(data: &AppData, query: &str) -> SearchOutcome {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_LEN {
        return SearchOutcome::TooShort;
    }
    let needle = trimmed.to_lowercase();

    let mut hits = Vec::new();

    hits.extend(
        data.tickets
            .iter()
            .filter(|t| matches(&needle, &[&t.title, &t.room, &t.description]))
            .take(MAX_HITS_PER_KIND)
            .map(|t| SearchHit {
                module: Module::Tickets,
                id: t.id,
                label: t.title.clone(),
                detail: format!("{} · {}", t.room, t.status),
            }),
    );

    hits.extend(
        data.inventory
            .iter()
            .filter(|i| {
                matches(
                    &needle,
                    &[
                        &i.name,
                        i.category.as_deref().unwrap_or(""),
                        i.location.as_deref().unwrap_or(""),
                    ],
                )
            })
            .take(MAX_HITS_PER_KIND)
            .map(|i| SearchHit {
                module: Module::Inventory,
                id: i.id,
                label: i.name.clone(),
                detail: format!("{} in stock", i.quantity),
            }),
    );

    hits.extend(
        data.visits
            .iter()
            .filter(|v| matches(&needle, &[&v.room, &v.technician]))
            .take(MAX_HITS_PER_KIND)
            .map(|v| SearchHit {
                module: Module::Maintenance,
                id: v.id,
                label: v.room.clone(),
                detail: format!("{} · {}", v.date, v.status),
            }),
    );

    hits.extend(
        data.equipment
            .iter()
            .filter(|e| {
                matches(
                    &needle,
                    &[
                        &e.asset_tag,
                        &e.name,
                        e.brand.as_deref().unwrap_or(""),
                        e.model.as_deref().unwrap_or(""),
                    ],
                )
            })
            .take(MAX_HITS_PER_KIND)
            .map(|e| SearchHit {
                module: Module::Equipment,
                id: e.id,
                label: e.name.clone(),
                detail: e.asset_tag.clone(),
            }),
    );

    SearchOutcome::Results { hits }
}
