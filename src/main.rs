//! ITOps Server - Internal IT Operations Console
//!
//! REST backend for the operations desk: inventory, tickets, preventive
//! maintenance, equipment and user administration, backed by a remote
//! tabular record store mirrored in memory.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use itops_server::{
    api,
    config::AppConfig,
    services::Services,
    state::AppData,
    store::RecordStore,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("itops_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ITOps Server v{}", env!("CARGO_PKG_VERSION"));

    // Connect to the remote record store and mirror all collections
    let store = RecordStore::new(&config.store)?;
    let data = AppData::load(&store).await;
    tracing::info!(
        users = data.users.len(),
        inventory = data.inventory.len(),
        movements = data.movements.len(),
        tickets = data.tickets.len(),
        visits = data.visits.len(),
        equipment = data.equipment.len(),
        "Collections loaded"
    );
    let shared = Arc::new(RwLock::new(data));

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create services and application state
    let services = Services::new(store, shared.clone());
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
        data: shared,
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse()?, server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        // Users (admin only)
        .route("/users", get(api::users::list_users))
        .route("/users", post(api::users::create_user))
        .route("/users/:id", put(api::users::update_user))
        .route("/users/:id", delete(api::users::delete_user))
        .route("/users/:id/toggle-active", post(api::users::toggle_active))
        // Inventory & movement ledger
        .route("/inventory", get(api::inventory::list_inventory))
        .route("/inventory", post(api::inventory::create_item))
        .route("/inventory/:id", put(api::inventory::update_item))
        .route("/inventory/:id", delete(api::inventory::delete_item))
        .route("/inventory/:id/movements", post(api::inventory::register_movement))
        .route("/movements", get(api::inventory::list_movements))
        // Tickets
        .route("/tickets", get(api::tickets::list_tickets))
        .route("/tickets", post(api::tickets::create_ticket))
        .route("/tickets/:id", put(api::tickets::update_ticket))
        .route("/tickets/:id", delete(api::tickets::delete_ticket))
        .route("/tickets/:id/claim", post(api::tickets::claim_ticket))
        .route("/tickets/:id/start", post(api::tickets::start_ticket))
        .route("/tickets/:id/resolve", post(api::tickets::resolve_ticket))
        // Preventive visits
        .route("/visits", get(api::visits::list_visits))
        .route("/visits", post(api::visits::create_visit))
        .route("/visits/:id", delete(api::visits::delete_visit))
        .route("/visits/:id/complete", post(api::visits::complete_visit))
        // Equipment
        .route("/equipment", get(api::equipment::list_equipment))
        .route("/equipment", post(api::equipment::create_equipment))
        .route("/equipment/:id", put(api::equipment::update_equipment))
        .route("/equipment/:id", delete(api::equipment::delete_equipment))
        // Derived state
        .route("/notifications", get(api::notifications::list_notifications))
        .route("/dashboard", get(api::dashboard::get_dashboard))
        .route("/reports", get(api::reports::get_report))
        .route("/search", get(api::search::search))
        // Backup
        .route("/backup/export", get(api::backup::export_backup))
        .route("/backup/import", post(api::backup::import_backup))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
