//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    auth, backup, dashboard, equipment, health, inventory, notifications, reports, search,
    tickets, users, visits,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ITOps API",
        version = "1.0.0",
        description = "Internal IT Operations Console REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "ITOps Team")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        // Users
        users::list_users,
        users::create_user,
        users::update_user,
        users::toggle_active,
        users::delete_user,
        // Inventory
        inventory::list_inventory,
        inventory::create_item,
        inventory::update_item,
        inventory::delete_item,
        inventory::register_movement,
        inventory::list_movements,
        // Tickets
        tickets::list_tickets,
        tickets::create_ticket,
        tickets::update_ticket,
        tickets::claim_ticket,
        tickets::start_ticket,
        tickets::resolve_ticket,
        tickets::delete_ticket,
        // Visits
        visits::list_visits,
        visits::create_visit,
        visits::complete_visit,
        visits::delete_visit,
        // Equipment
        equipment::list_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Derived state
        notifications::list_notifications,
        dashboard::get_dashboard,
        reports::get_report,
        search::search,
        // Backup
        backup::export_backup,
        backup::import_backup,
    ),
    components(
        schemas(
            // Users & auth
            crate::models::User,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            crate::models::enums::Role,
            auth::LoginRequest,
            // Inventory
            crate::models::InventoryItem,
            crate::models::StockMovement,
            crate::models::inventory::InventoryItemInput,
            crate::models::inventory::MovementRequest,
            crate::models::enums::MovementKind,
            crate::services::inventory::MovementResult,
            // Tickets
            crate::models::Ticket,
            crate::models::ticket::CreateTicket,
            crate::models::ticket::UpdateTicket,
            crate::models::ticket::ResolveTicket,
            crate::models::enums::TicketStatus,
            crate::models::enums::TicketPriority,
            crate::models::enums::TicketKind,
            // Visits
            crate::models::PreventiveVisit,
            crate::models::visit::CreateVisit,
            crate::models::visit::Checklist,
            crate::models::enums::VisitStatus,
            // Equipment
            crate::models::Equipment,
            crate::models::equipment::EquipmentInput,
            crate::models::enums::EquipmentStatus,
            // Derived state
            crate::derived::Module,
            crate::derived::Notification,
            crate::derived::Severity,
            crate::derived::DashboardSummary,
            crate::derived::dashboard::KindSlice,
            crate::derived::Report,
            crate::derived::ReportPeriod,
            crate::derived::reports::TicketTotals,
            crate::derived::reports::StockTotals,
            crate::derived::reports::VisitTotals,
            crate::derived::SearchOutcome,
            crate::derived::SearchHit,
            // Backup
            crate::services::backup::BackupDocument,
            // Health
            health::HealthResponse,
            health::ReadinessResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication"),
        (name = "users", description = "User administration"),
        (name = "inventory", description = "Stock items and movement ledger"),
        (name = "tickets", description = "Support tickets"),
        (name = "visits", description = "Preventive-maintenance visits"),
        (name = "equipment", description = "Equipment registry"),
        (name = "derived", description = "Notifications, dashboard, reports, search"),
        (name = "backup", description = "Backup export/import")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
