//! Service-level tests with the record store mocked out

use std::sync::Arc;

use serde_json::json;
use tokio::sync::RwLock;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use itops_server::config::StoreConfig;
use itops_server::error::AppError;
use itops_server::models::enums::{MovementKind, Role, TicketKind, TicketPriority, TicketStatus};
use itops_server::models::inventory::MovementRequest;
use itops_server::models::ticket::ResolveTicket;
use itops_server::models::{InventoryItem, Ticket, User};
use itops_server::services::backup::BackupDocument;
use itops_server::services::Services;
use itops_server::state::{AppData, SharedState};
use itops_server::store::RecordStore;

fn services_for(server: &MockServer, data: AppData) -> (Services, SharedState) {
    let config = StoreConfig {
        url: server.uri(),
        api_key: String::new(),
        timeout_seconds: 5,
    };
    let store = RecordStore::new(&config).expect("client should build");
    let shared: SharedState = Arc::new(RwLock::new(data));
    (Services::new(store, shared.clone()), shared)
}

fn technician(id: i64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        password: "pw".to_string(),
        role: Role::Technician,
        active: Some(true),
    }
}

fn cable_item(quantity: i64) -> InventoryItem {
    InventoryItem {
        id: 1,
        name: "HDMI cable".to_string(),
        quantity,
        minimum: 2,
        location: None,
        category: None,
    }
}

fn pending_ticket(id: i64) -> Ticket {
    Ticket {
        id,
        title: "Printer jam".to_string(),
        room: "101".to_string(),
        description: String::new(),
        priority: TicketPriority::Medium,
        kind: TicketKind::Hardware,
        photo: None,
        status: TicketStatus::Pending,
        technician: None,
        date: "2024-03-10".parse().unwrap(),
        resolution: None,
    }
}

#[tokio::test]
async fn issue_larger_than_stock_floors_quantity_at_zero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/historico_estoque"))
        .and(body_partial_json(json!({"tipo": "saida", "quantidade": 10, "motivo": "Manual issue"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
            "id": 5, "item_id": 1, "item": "HDMI cable", "tipo": "saida",
            "quantidade": 10, "data": "2024-03-10", "responsavel": "Alex",
            "motivo": "Manual issue"
        }])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/estoque"))
        .and(query_param("id", "eq.1"))
        .and(body_partial_json(json!({"quantidade": 0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1, "nome": "HDMI cable", "quantidade": 0, "minimo": 2,
            "localizacao": null, "categoria": null
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let data = AppData {
        inventory: vec![cable_item(3)],
        ..Default::default()
    };
    let (services, state) = services_for(&server, data);

    let result = services
        .inventory
        .register_movement(
            1,
            MovementRequest {
                kind: MovementKind::Out,
                quantity: 10,
                reason: None,
            },
            "Alex",
        )
        .await
        .expect("movement should register");

    assert_eq!(result.item.quantity, 0);
    let data = state.read().await;
    assert_eq!(data.inventory[0].quantity, 0);
    assert_eq!(data.movements.len(), 1, "ledger row appended");
}

#[tokio::test]
async fn non_positive_movement_never_reaches_the_store() {
    let server = MockServer::start().await;
    let data = AppData {
        inventory: vec![cable_item(3)],
        ..Default::default()
    };
    let (services, state) = services_for(&server, data);

    let result = services
        .inventory
        .register_movement(
            1,
            MovementRequest {
                kind: MovementKind::In,
                quantity: 0,
                reason: None,
            },
            "Alex",
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(state.read().await.movements.is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn claim_assigns_the_acting_user_when_unassigned() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/chamados"))
        .and(query_param("id", "eq.1"))
        .and(body_partial_json(json!({"status": "em_andamento", "tecnico": "Alex"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1, "titulo": "Printer jam", "sala": "101", "descricao": "",
            "prioridade": "media", "tipo": "hardware", "foto": null,
            "status": "em_andamento", "tecnico": "Alex", "data": "2024-03-10",
            "resolucao": null
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let data = AppData {
        tickets: vec![pending_ticket(1)],
        ..Default::default()
    };
    let (services, state) = services_for(&server, data);

    let ticket = services
        .tickets
        .claim(1, &technician(2, "Alex"))
        .await
        .expect("claim should succeed");

    assert_eq!(ticket.status, TicketStatus::InProgress);
    assert_eq!(ticket.technician.as_deref(), Some("Alex"));
    assert_eq!(
        state.read().await.tickets[0].status,
        TicketStatus::InProgress
    );
}

#[tokio::test]
async fn blank_resolution_is_rejected_without_store_traffic() {
    let server = MockServer::start().await;
    let mut ticket = pending_ticket(1);
    ticket.status = TicketStatus::InProgress;
    let data = AppData {
        tickets: vec![ticket],
        ..Default::default()
    };
    let (services, state) = services_for(&server, data);

    let result = services
        .tickets
        .resolve(
            1,
            ResolveTicket {
                resolution: "   ".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(state.read().await.tickets[0].status, TicketStatus::InProgress);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn done_tickets_cannot_transition_again() {
    let server = MockServer::start().await;
    let mut ticket = pending_ticket(1);
    ticket.status = TicketStatus::Done;
    let data = AppData {
        tickets: vec![ticket],
        ..Default::default()
    };
    let (services, _state) = services_for(&server, data);

    let claim = services.tickets.claim(1, &technician(2, "Alex")).await;
    let resolve = services
        .tickets
        .resolve(
            1,
            ResolveTicket {
                resolution: "again".to_string(),
            },
        )
        .await;

    assert!(matches!(claim, Err(AppError::BusinessRule(_))));
    assert!(matches!(resolve, Err(AppError::BusinessRule(_))));
}

#[tokio::test]
async fn failed_store_write_leaves_local_state_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/chamados"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let data = AppData {
        tickets: vec![pending_ticket(1)],
        ..Default::default()
    };
    let (services, state) = services_for(&server, data);

    let result = services.tickets.claim(1, &technician(2, "Alex")).await;

    assert!(matches!(result, Err(AppError::Store(_))));
    let data = state.read().await;
    assert_eq!(data.tickets[0].status, TicketStatus::Pending);
    assert_eq!(data.tickets[0].technician, None);
}

#[tokio::test]
async fn backup_import_replaces_only_present_collections() {
    let server = MockServer::start().await;
    let data = AppData {
        users: vec![technician(1, "Ana")],
        inventory: vec![cable_item(3)],
        tickets: vec![pending_ticket(1)],
        ..Default::default()
    };
    let (services, state) = services_for(&server, data);

    let document: BackupDocument = serde_json::from_value(json!({
        "estoque": [{
            "id": 9, "name": "Toner", "quantity": 4, "minimum": 1,
            "location": null, "category": null
        }]
    }))
    .expect("document should parse");

    services.backup.import(document).await.expect("import should succeed");

    let data = state.read().await;
    assert_eq!(data.inventory.len(), 1);
    assert_eq!(data.inventory[0].name, "Toner");
    assert_eq!(data.users.len(), 1, "absent keys keep current data");
    assert_eq!(data.tickets.len(), 1);
    assert!(server.received_requests().await.unwrap().is_empty(), "import is local only");
}

#[tokio::test]
async fn deactivated_accounts_cannot_authenticate() {
    let server = MockServer::start().await;
    let mut inactive = technician(1, "Ana");
    inactive.active = Some(false);
    let mut unflagged = technician(2, "Bruno");
    unflagged.active = None;
    let data = AppData {
        users: vec![inactive, unflagged],
        ..Default::default()
    };
    let (services, _state) = services_for(&server, data);

    let blocked = services.auth.authenticate("ana@example.com", "pw").await;
    let allowed = services.auth.authenticate("bruno@example.com", "pw").await;

    assert!(matches!(blocked, Err(AppError::Authentication(_))));
    assert_eq!(allowed.expect("unset flag allows login").name, "Bruno");
}
