//! ITOps - Internal IT Operations Console
//!
//! A Rust REST API server for a small organization's IT operations desk:
//! equipment inventory, consumable stock, support tickets and scheduled
//! preventive-maintenance visits, with role-gated user administration.
//! Persistence is delegated to a remote tabular record store; this server
//! mirrors the collections in memory and derives notifications, dashboard
//! aggregates, report rollups and global search results from them.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod derived;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    /// Mirrored collections, read directly by the derived-state endpoints
    pub data: state::SharedState,
}
