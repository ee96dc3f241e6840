//! End-to-end tests: `TaskApiClient` and `TaskAdmin` against a live server on a loopback port.

use axum::{Router, http::StatusCode, routing::get};
use db::{
    TaskStore,
    models::{
        assignee::{Assignee, CreateAssignee},
        task::{Task, TaskField, UpdateTask},
    },
};
use server::{AppState, Server};
use services::services::{
    task_admin::TaskAdmin,
    task_api::{ClientConfig, ErrorKind, TaskApi, TaskApiClient},
};
use tokio::net::TcpListener;

// ============================================================================
// TEST SETUP UTILITIES
// ============================================================================

fn person(id: &str, name: &str) -> Assignee {
    Assignee {
        id: id.to_string(),
        name: name.to_string(),
        avatar: format!("https://avatars.githubusercontent.com/u/{id}"),
    }
}

fn seeded_store() -> TaskStore {
    let alice = person("1", "Alice");
    let bob = person("2", "Bob");
    let tasks = vec![
        Task {
            id: "1".to_string(),
            assignees: vec![alice.clone()],
            status: "Pending".to_string(),
            priority: "Low".to_string(),
            due_date: "2025-08-07".to_string(),
        },
        Task {
            id: "2".to_string(),
            assignees: vec![alice.clone(), bob.clone()],
            status: "Completed".to_string(),
            priority: "High".to_string(),
            due_date: "2025-08-20".to_string(),
        },
    ];
    TaskStore::new(vec![alice, bob], tasks)
}

/// Starts the API on an ephemeral port and returns a client pointed at it.
async fn spawn_server() -> TaskApiClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(Server::serve(listener, AppState::new(seeded_store())));

    TaskApiClient::new(&ClientConfig {
        api_base: format!("http://{addr}"),
    })
    .unwrap()
}

fn ids(assignees: &[Assignee]) -> Vec<&str> {
    assignees.iter().map(|a| a.id.as_str()).collect()
}

// ============================================================================
// CLIENT
// ============================================================================

#[tokio::test]
async fn test_client_fetches_collections() {
    let api = spawn_server().await;

    let columns = api.fetch_columns().await.unwrap();
    assert_eq!(columns.len(), 5);
    assert_eq!(columns[4].field, TaskField::Assignees);

    assert_eq!(ids(&api.fetch_assignees().await.unwrap()), vec!["1", "2"]);
    assert_eq!(api.fetch_tasks().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_client_update_merges_fields() {
    let api = spawn_server().await;

    let update = UpdateTask {
        priority: Some("Medium".to_string()),
        ..Default::default()
    };
    let task = api.update_task("1", &update).await.unwrap();
    assert_eq!(task.priority, "Medium");
    assert_eq!(task.status, "Pending");

    let err = api.update_task("99", &update).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "Task not found");
}

#[tokio::test]
async fn test_client_assignee_lifecycle() {
    let api = spawn_server().await;
    let carol = person("3", "Carol");

    let created = api
        .create_assignee(&CreateAssignee::from(&carol))
        .await
        .unwrap();
    assert_eq!(created, carol);
    assert_eq!(api.get_assignee("3").await.unwrap(), carol);

    let err = api
        .create_assignee(&CreateAssignee::from(&carol))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let err = api
        .create_assignee(&CreateAssignee {
            id: Some("4".to_string()),
            name: Some("Dan".to_string()),
            avatar: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(err.to_string(), "Missing fields");

    api.delete_assignee("3").await.unwrap();
    let err = api.get_assignee("3").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_unreachable_server_is_network_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = TaskApiClient::new(&ClientConfig {
        api_base: format!("http://{addr}"),
    })
    .unwrap();

    let err = api.fetch_tasks().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NetworkFailure);
    assert!(TaskAdmin::load(api).await.is_err());
}

#[tokio::test]
async fn test_error_status_without_body_is_network_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route("/api/tasks", get(|| async { StatusCode::CONFLICT }));
    tokio::spawn(async move { axum::serve(listener, app).await });

    let api = TaskApiClient::new(&ClientConfig {
        api_base: format!("http://{addr}"),
    })
    .unwrap();

    let err = api.fetch_tasks().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NetworkFailure);
    assert_eq!(err.to_string(), "Something went wrong");
}

// ============================================================================
// TABLE OVER HTTP
// ============================================================================

#[tokio::test]
async fn test_assignee_editing_round_trip() {
    let mut admin = TaskAdmin::load(spawn_server().await).await.unwrap();

    admin.click_cell("1", TaskField::Assignees);
    assert!(admin.open_picker());
    admin.add_assignee("2").await;
    assert_eq!(ids(&admin.task("1").unwrap().assignees), vec!["1", "2"]);

    admin.remove_assignee("1").await;
    admin.dismiss_picker().await;

    let stored = admin.api().fetch_tasks().await.unwrap();
    assert_eq!(ids(&stored[0].assignees), vec!["2"]);
}

#[tokio::test]
async fn test_delete_cascade_visible_after_reload() {
    let mut admin = TaskAdmin::load(spawn_server().await).await.unwrap();

    admin.api().delete_assignee("1").await.unwrap();
    admin.reload().await.unwrap();

    assert_eq!(ids(admin.assignees()), vec!["2"]);
    assert!(admin.task("1").unwrap().assignees.is_empty());
    assert_eq!(ids(&admin.task("2").unwrap().assignees), vec!["2"]);
}

#[tokio::test]
async fn test_text_edit_persists() {
    let mut admin = TaskAdmin::load(spawn_server().await).await.unwrap();

    admin.click_cell("2", TaskField::Status);
    admin.input_change("In Progress");
    admin.commit().await;

    assert_eq!(admin.task("2").unwrap().status, "In Progress");
    let stored = admin.api().fetch_tasks().await.unwrap();
    assert_eq!(stored[1].status, "In Progress");
}
