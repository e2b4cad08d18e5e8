//! Gateway integration tests
//!
//! Every endpoint against a seeded in-memory store.

use axum::http::StatusCode;
use groupdesk::shared::groups::paths;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{assert_error_envelope, assert_message, seeded_store, test_server};

#[tokio::test]
async fn test_list_groups_returns_every_document() {
    let server = test_server(seeded_store().await);

    let response = server.get(paths::LIST_GROUPS).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let groups = body.as_array().expect("expected a JSON array");
    assert_eq!(groups.len(), 3);

    let eng = groups.iter().find(|g| g["id"] == "g1").expect("g1 missing");
    assert_eq!(eng["name"], "Eng");
    assert_eq!(eng["members"], json!(["m1"]));
    assert!(eng.get("users").is_none());
}

#[tokio::test]
async fn test_add_member_is_idempotent() {
    let store = seeded_store().await;
    let server = test_server(store.clone());
    let body = json!({ "groupId": "g2", "newMember": "alice" });

    for _ in 0..2 {
        let response = server.post(paths::ADD_MEMBER).json(&body).await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_message(&response.json(), "Member added successfully");
    }

    let sales = store.group("g2").await.expect("g2 missing");
    assert_eq!(
        sales.users,
        Some(vec!["bob".to_string(), "alice".to_string()])
    );
}

#[tokio::test]
async fn test_add_member_creates_missing_users_set() {
    let store = seeded_store().await;
    let server = test_server(store.clone());

    let response = server
        .post(paths::ADD_MEMBER)
        .json(&json!({ "groupId": "g1", "newMember": "alice" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let eng = store.group("g1").await.expect("g1 missing");
    assert_eq!(eng.users, Some(vec!["alice".to_string()]));
    assert_eq!(eng.members, Some(vec!["m1".to_string()]));
}

#[tokio::test]
async fn test_add_member_to_unknown_group_fails() {
    let server = test_server(seeded_store().await);

    let response = server
        .post(paths::ADD_MEMBER)
        .json(&json!({ "groupId": "nope", "newMember": "alice" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_error_envelope(&response.json(), "No document to update: groups/nope");
}

#[tokio::test]
async fn test_missing_body_field_is_a_server_error() {
    let server = test_server(seeded_store().await);

    let response = server
        .post(paths::ADD_MEMBER)
        .json(&json!({ "groupId": "g1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_error_envelope(
        &response.json(),
        "Missing value for required field 'newMember'",
    );
}

#[tokio::test]
async fn test_wrong_field_type_is_a_server_error() {
    let store = seeded_store().await;
    let server = test_server(store.clone());

    let response = server
        .post(paths::ADD_MEMBER)
        .json(&json!({ "groupId": 5, "newMember": "alice" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "Internal Server Error");
    let details = body["details"].as_str().expect("details missing");
    crate::assert_contains!(details, "groupId");
    assert_eq!(store.group("g1").await.expect("g1 missing").users, None);
}

#[tokio::test]
async fn test_non_json_body_is_a_server_error() {
    let server = test_server(seeded_store().await);

    for endpoint in [
        paths::ADD_MEMBER,
        paths::ADD_PERMISSION,
        paths::DELETE_USER,
        paths::DELETE_MEMBER,
    ] {
        let response = server.post(endpoint).text("not json").await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"], "Internal Server Error");
        let details = body["details"].as_str().expect("details missing");
        crate::assert_contains!(details, "Content-Type");
    }
}

#[tokio::test]
async fn test_add_permission_then_delete_member() {
    let store = seeded_store().await;
    let server = test_server(store.clone());

    let response = server
        .post(paths::ADD_PERMISSION)
        .json(&json!({ "groupId": "g1", "member": "m2" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_message(&response.json(), "Permission added successfully");

    let response = server
        .post(paths::DELETE_MEMBER)
        .json(&json!({ "groupId": "g1", "member": "m1" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_message(&response.json(), "Member deleted successfully");

    let eng = store.group("g1").await.expect("g1 missing");
    assert_eq!(eng.members, Some(vec!["m2".to_string()]));
    assert_eq!(eng.users, None);
}

#[tokio::test]
async fn test_delete_user_twice_succeeds() {
    let store = seeded_store().await;
    let server = test_server(store.clone());
    let body = json!({ "groupId": "g2", "user": "bob" });

    for _ in 0..2 {
        let response = server.post(paths::DELETE_USER).json(&body).await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_message(&response.json(), "User deleted successfully");
    }

    let sales = store.group("g2").await.expect("g2 missing");
    assert_eq!(sales.users, Some(Vec::new()));
}

#[tokio::test]
async fn test_delete_user_only_touches_users() {
    let store = seeded_store().await;
    let server = test_server(store.clone());

    let response = server
        .post(paths::DELETE_USER)
        .json(&json!({ "groupId": "g1", "user": "m1" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let eng = store.group("g1").await.expect("g1 missing");
    assert_eq!(eng.members, Some(vec!["m1".to_string()]));
}

#[tokio::test]
async fn test_member_posts_filters_by_member() {
    let server = test_server(seeded_store().await);

    let response = server
        .get(paths::MEMBER_POSTS)
        .add_query_param("member", "m1")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let ids: Vec<&str> = body
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .filter_map(|p| p["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["p1", "p2"]);
}

#[tokio::test]
async fn test_member_posts_for_unknown_member_is_empty() {
    let server = test_server(seeded_store().await);

    let response = server
        .get(paths::MEMBER_POSTS)
        .add_query_param("member", "nobody")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_member_posts_without_member_fails() {
    let server = test_server(seeded_store().await);

    let response = server.get(paths::MEMBER_POSTS).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_error_envelope(&response.json(), "Missing value for required field 'member'");
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let server = test_server(seeded_store().await);

    let response = server.get(paths::ADD_MEMBER).await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.text(), "Method Not Allowed");

    let response = server.post(paths::LIST_GROUPS).await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

    let response = server.post(paths::MEMBER_POSTS).await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let server = test_server(seeded_store().await);

    let response = server.get("/api/nothing/here").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
