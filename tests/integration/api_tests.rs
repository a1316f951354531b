//! API integration tests
//!
//! These run against a live server with a reachable record store.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to log in and fetch the acting user's id
async fn get_user_id(client: &Client) -> i64 {
    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@example.com",
            "password": "admin"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["id"].as_i64().expect("No id in response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
#[ignore]
async fn test_login() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@example.com",
            "password": "admin"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
#[ignore]
async fn test_dashboard_requires_identity() {
    let client = Client::new();

    let response = client
        .get(format!("{}/dashboard", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_dashboard() {
    let client = Client::new();
    let user_id = get_user_id(&client).await;

    let response = client
        .get(format!("{}/dashboard", BASE_URL))
        .header("x-user-id", user_id.to_string())
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["completion_rate"].is_number());
    assert!(body["recent_tickets"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_search_too_short() {
    let client = Client::new();
    let user_id = get_user_id(&client).await;

    let response = client
        .get(format!("{}/search?q=a", BASE_URL))
        .header("x-user-id", user_id.to_string())
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["outcome"], "too_short");
}

#[tokio::test]
#[ignore]
async fn test_ticket_lifecycle() {
    let client = Client::new();
    let user_id = get_user_id(&client).await;

    let created: Value = client
        .post(format!("{}/tickets", BASE_URL))
        .header("x-user-id", user_id.to_string())
        .json(&json!({
            "title": "Integration test ticket",
            "room": "Lab 3",
            "priority": "low",
            "kind": "software"
        }))
        .send()
        .await
        .expect("Failed to create ticket")
        .json()
        .await
        .expect("Failed to parse ticket");
    let id = created["id"].as_i64().expect("ticket id");
    assert_eq!(created["status"], "pending");

    let claimed: Value = client
        .post(format!("{}/tickets/{}/claim", BASE_URL, id))
        .header("x-user-id", user_id.to_string())
        .send()
        .await
        .expect("Failed to claim ticket")
        .json()
        .await
        .expect("Failed to parse ticket");
    assert_eq!(claimed["status"], "in_progress");

    let resolved: Value = client
        .post(format!("{}/tickets/{}/resolve", BASE_URL, id))
        .header("x-user-id", user_id.to_string())
        .json(&json!({"resolution": "Reinstalled the driver"}))
        .send()
        .await
        .expect("Failed to resolve ticket")
        .json()
        .await
        .expect("Failed to parse ticket");
    assert_eq!(resolved["status"], "done");

    let delete = client
        .delete(format!("{}/tickets/{}", BASE_URL, id))
        .header("x-user-id", user_id.to_string())
        .send()
        .await
        .expect("Failed to delete ticket");
    assert_eq!(delete.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_backup_export_names_the_file() {
    let client = Client::new();
    let user_id = get_user_id(&client).await;

    let response = client
        .get(format!("{}/backup/export", BASE_URL))
        .header("x-user-id", user_id.to_string())
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let disposition = response
        .headers()
        .get("content-disposition")
        .expect("No content-disposition header")
        .to_str()
        .expect("Invalid header");
    assert!(disposition.contains("backup-ti-"));

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["estoque"].is_array());
    assert!(body["chamados"].is_array());
}
