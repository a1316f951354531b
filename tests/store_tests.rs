//! Record store adapter tests against a mocked table API

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use itops_server::config::StoreConfig;
use itops_server::store::{RecordStore, StoreError};

fn store_for(server: &MockServer) -> RecordStore {
    let config = StoreConfig {
        url: server.uri(),
        api_key: String::new(),
        timeout_seconds: 5,
    };
    RecordStore::new(&config).expect("client should build")
}

#[tokio::test]
async fn fetch_lists_rows_ordered_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/usuarios"))
        .and(query_param("select", "*"))
        .and(query_param("order", "id.asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "nome": "Ana", "email": "ana@example.com", "senha": "pw", "nivel": "admin", "ativo": true},
            {"id": 2, "nome": "Bruno", "email": "bruno@example.com", "senha": "pw", "nivel": "tecnico", "ativo": null}
        ])))
        .mount(&server)
        .await;

    let users = store_for(&server).fetch_users().await.expect("fetch should succeed");

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Ana");
    assert!(users[0].is_admin());
    assert!(users[1].is_active());
}

#[tokio::test]
async fn insert_returns_the_created_row() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chamados"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
            "id": 42,
            "titulo": "Printer jam",
            "sala": "101",
            "descricao": "Paper stuck",
            "prioridade": "alta",
            "tipo": "hardware",
            "foto": null,
            "status": "pendente",
            "tecnico": "Não atribuído",
            "data": "2024-03-10",
            "resolucao": null
        }])))
        .mount(&server)
        .await;

    let store = store_for(&server);
    let tickets = json_ticket_fields();
    let ticket = store.insert_ticket(&tickets).await.expect("insert should succeed");

    assert_eq!(ticket.id, 42);
    assert_eq!(ticket.technician, None, "sentinel maps to unassigned");
}

#[tokio::test]
async fn empty_patch_reply_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/chamados"))
        .and(query_param("id", "eq.7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let result = store_for(&server)
        .update_ticket(7, &json_ticket_fields())
        .await;

    assert!(matches!(result, Err(StoreError::EmptyReply { .. })));
}

#[tokio::test]
async fn non_2xx_status_surfaces_as_store_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/estoque"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = store_for(&server).fetch_inventory().await;

    match result {
        Err(StoreError::Status { table, body, .. }) => {
            assert_eq!(table, "estoque");
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn delete_targets_the_row_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/preventivas"))
        .and(query_param("id", "eq.3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    store_for(&server)
        .delete_visit(3)
        .await
        .expect("delete should succeed");
}

fn json_ticket_fields() -> itops_server::models::ticket::TicketFields {
    itops_server::models::ticket::TicketFields {
        titulo: "Printer jam".to_string(),
        sala: "101".to_string(),
        descricao: "Paper stuck".to_string(),
        prioridade: "alta".to_string(),
        tipo: "hardware".to_string(),
        foto: None,
        status: "pendente".to_string(),
        tecnico: "Não atribuído".to_string(),
        data: "2024-03-10".parse().unwrap(),
        resolucao: None,
    }
}
