//! HTTP client integration tests
//!
//! The blocking client runs inside `spawn_blocking`; the mock servers and the
//! live gateway run on the test runtime.

use groupdesk::egui_app::groups::{ClientError, GroupApi, HttpGroupApi};
use groupdesk::egui_app::Config;
use groupdesk::shared::format::format_date;
use groupdesk::shared::groups::paths;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(base_url: &str) -> HttpGroupApi {
    let config = Config::with_server_url(base_url).expect("valid test URL");
    HttpGroupApi::new(config)
}

async fn blocking<T, F>(base_url: String, call: F) -> T
where
    T: Send + 'static,
    F: FnOnce(&HttpGroupApi) -> T + Send + 'static,
{
    tokio::task::spawn_blocking(move || call(&client_for(&base_url)))
        .await
        .expect("blocking task panicked")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_groups_tolerates_sparse_documents() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(paths::LIST_GROUPS))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "g1", "name": "Eng", "members": ["m1"] },
            {
                "id": "g2",
                "name": "Sales",
                "users": ["bob", 7, null],
                "created": { "seconds": 1718456709, "nanoseconds": 0 }
            }
        ])))
        .mount(&server)
        .await;

    let groups = blocking(server.uri(), |api| api.fetch_groups()).await;
    let groups = crate::assert_ok!(groups);

    assert_eq!(groups.len(), 2);
    assert!(groups[0].users.is_empty());
    assert_eq!(groups[0].members, vec!["m1".to_string()]);
    assert_eq!(format_date(groups[0].created.as_deref()), "N/A");
    assert_eq!(groups[1].users, vec!["bob".to_string()]);
    assert!(groups[1].created.is_some());
    assert_ne!(format_date(groups[1].created.as_deref()), "Invalid Date");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_member_sends_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(paths::ADD_MEMBER))
        .and(body_json(json!({ "groupId": "g1", "newMember": "alice" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Member added successfully" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let message = blocking(server.uri(), |api| api.add_member("g1", "alice")).await;

    assert_eq!(message, Ok("Member added successfully".to_string()));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_error_envelope_details_become_the_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(paths::DELETE_USER))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "Internal Server Error",
            "details": "No document to update: groups/nope"
        })))
        .mount(&server)
        .await;

    let result = blocking(server.uri(), |api| api.delete_user("nope", "bob")).await;

    assert_eq!(
        result,
        Err(ClientError::Status {
            status: 500,
            message: "No document to update: groups/nope".to_string(),
        })
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_non_envelope_failure_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(paths::LIST_GROUPS))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let result = blocking(server.uri(), |api| api.fetch_groups()).await;

    match result {
        Err(ClientError::Status { status, message }) => {
            assert_eq!(status, 502);
            crate::assert_contains!(message, "Failed to fetch groups");
        }
        other => panic!("expected a status error, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_member_posts_sends_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(paths::MEMBER_POSTS))
        .and(query_param("member", "m1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "p1", "categories": "news" },
            { "id": "p2", "categories": [] }
        ])))
        .mount(&server)
        .await;

    let posts = blocking(server.uri(), |api| api.fetch_member_posts("m1")).await;
    let posts = crate::assert_ok!(posts);

    let labels: Vec<String> = posts.iter().map(|p| p.category_label()).collect();
    assert_eq!(labels, vec!["news".to_string(), "Uncategorized".to_string()]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unreachable_gateway_is_a_network_error() {
    let result = blocking("http://127.0.0.1:1".to_string(), |api| api.fetch_groups()).await;
    crate::assert_err!(result, ClientError::Network(_));
}

#[cfg(feature = "ssr")]
mod live_gateway {
    use super::*;
    use crate::common::{seeded_store, spawn_gateway};
    use groupdesk::egui_app::groups::{GroupListState, LoadStatus, ViewCapabilities};
    use groupdesk::shared::groups::Group;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    /// What the panel ended up showing; the state itself stays on the blocking thread
    #[derive(Debug)]
    struct Outcome {
        load_status: LoadStatus,
        error: Option<String>,
        success_message: Option<String>,
        groups: Vec<Group>,
        filtered_groups: Vec<Group>,
    }

    impl Outcome {
        fn of(state: &GroupListState) -> Self {
            Self {
                load_status: state.load_status,
                error: state.error.clone(),
                success_message: state.success_message.clone(),
                groups: state.groups.clone(),
                filtered_groups: state.filtered_groups.clone(),
            }
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_panel_round_trip_against_gateway() {
        let store = seeded_store().await;
        let base_url = spawn_gateway(store.clone()).await;

        let state = tokio::task::spawn_blocking(move || {
            let api: Arc<dyn GroupApi> = Arc::new(client_for(&base_url));
            let mut state = GroupListState::new(api, ViewCapabilities::full());
            state.load();
            state.wait_for_pending();
            assert_eq!(state.load_status, LoadStatus::Loaded);

            state.search("eng");
            let sales = state
                .groups
                .iter()
                .find(|g| g.id == "g2")
                .cloned()
                .expect("g2 missing");
            state.open_add_member(&sales);
            state.input_value = "alice".to_string();
            state.confirm_input();
            state.wait_for_pending();
            Outcome::of(&state)
        })
        .await
        .expect("blocking task panicked");

        assert!(state.error.is_none(), "unexpected error: {:?}", state.error);
        assert_eq!(state.success_message.as_deref(), Some("Member added successfully"));
        let local = state.groups.iter().find(|g| g.id == "g2").expect("g2 missing");
        assert_eq!(local.users, vec!["bob".to_string(), "alice".to_string()]);
        assert!(state.filtered_groups.iter().all(|g| g.id != "g2"));

        let remote = store.group("g2").await.expect("g2 missing in store");
        assert_eq!(remote.users, Some(local.users.clone()));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_panel_surfaces_gateway_failure() {
        let store = seeded_store().await;
        let base_url = spawn_gateway(store).await;

        let state = tokio::task::spawn_blocking(move || {
            let api: Arc<dyn GroupApi> = Arc::new(client_for(&base_url));
            let mut state = GroupListState::new(api, ViewCapabilities::full());
            state.load();
            state.wait_for_pending();

            state.request_delete_member("nope", "m1");
            state.confirm_delete();
            state.wait_for_pending();
            Outcome::of(&state)
        })
        .await
        .expect("blocking task panicked");

        assert_eq!(state.error.as_deref(), Some("No document to update: groups/nope"));
        assert_eq!(state.load_status, LoadStatus::Loaded);
        assert_eq!(state.groups.len(), 3);
    }
}
