//! Group and post fixtures
//!
//! Three groups: "Eng" (no `users` set at all, one member), "Sales" (one
//! user) and "Engagement" (both sets empty, with a creation time).

use chrono::{TimeZone, Utc};
use groupdesk::shared::groups::{GroupDocument, Post};

pub fn sample_documents() -> Vec<GroupDocument> {
    vec![
        GroupDocument {
            id: "g1".to_string(),
            name: "Eng".to_string(),
            users: None,
            members: Some(vec!["m1".to_string()]),
            created: None,
        },
        GroupDocument {
            id: "g2".to_string(),
            name: "Sales".to_string(),
            users: Some(vec!["bob".to_string()]),
            members: Some(Vec::new()),
            created: None,
        },
        GroupDocument {
            created: Utc.with_ymd_and_hms(2024, 6, 15, 13, 5, 9).single(),
            ..GroupDocument::new("g3", "Engagement")
        },
    ]
}

pub fn sample_posts() -> Vec<(&'static str, Post)> {
    vec![
        ("m1", Post::new("p1", &["news", "events"])),
        ("m1", Post::new("p2", &[])),
        ("m2", Post::new("p3", &["jobs"])),
    ]
}

#[cfg(feature = "ssr")]
mod gateway {
    use std::sync::Arc;

    use axum_test::TestServer;
    use groupdesk::backend::{create_app_with_store, MemoryStore};

    use super::{sample_documents, sample_posts};

    /// Memory store seeded with the sample groups and posts
    pub async fn seeded_store() -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::with_groups(sample_documents()));
        for (member, post) in sample_posts() {
            store.insert_post(member, post).await;
        }
        store
    }

    /// In-process gateway over `store`
    pub fn test_server(store: Arc<MemoryStore>) -> TestServer {
        let app = create_app_with_store(store);
        TestServer::new(app).expect("Failed to create test server")
    }

    /// Gateway bound to an ephemeral local port; returns its base URL
    pub async fn spawn_gateway(store: Arc<MemoryStore>) -> String {
        let app = create_app_with_store(store);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Gateway stopped");
        });
        format!("http://{}", addr)
    }
}

#[cfg(feature = "ssr")]
pub use gateway::*;
