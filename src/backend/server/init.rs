/**
 * Server Initialization
 *
 * This module builds the Axum application: it picks the document store,
 * assembles the application state and configures the router.
 *
 * # Initialization Process
 *
 * 1. Load the store (PostgreSQL when configured, memory otherwise)
 * 2. Create the application state
 * 3. Create and configure the router
 */

#[cfg(feature = "ssr")]
use axum::Router;
#[cfg(feature = "ssr")]
use crate::backend::groups::store::SharedStore;
#[cfg(feature = "ssr")]
use crate::backend::routes::router::create_router;
#[cfg(feature = "ssr")]
use crate::backend::server::config::{load_store, ServerConfig};
#[cfg(feature = "ssr")]
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Error Handling
///
/// The function is resilient: a missing or unreachable database is logged
/// and the in-memory store is used instead.
#[cfg(feature = "ssr")]
pub async fn create_app(config: ServerConfig) -> Router<()> {
    tracing::info!("Initializing groupdesk gateway");

    let store = load_store(&config).await;
    create_app_with_store(store)
}

/// Create the application around an already constructed store
#[cfg(feature = "ssr")]
pub fn create_app_with_store(store: SharedStore) -> Router<()> {
    let app_state = AppState::new(store);
    let app = create_router(app_state);
    tracing::info!("Router configured");
    app
}
