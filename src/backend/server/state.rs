/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds the document store handle shared by every handler.
 * Handlers are stateless: nothing is retained across requests beyond what
 * the store persists.
 *
 * # State Extraction
 *
 * The `FromRef` implementation lets handlers extract the store alone:
 *
 * ```rust,ignore
 * async fn handler(State(store): State<SharedStore>) {
 *     let groups = store.list_groups().await;
 * }
 * ```
 */

#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use crate::backend::groups::store::SharedStore;

/// Central application state
#[cfg(feature = "ssr")]
#[derive(Clone)]
pub struct AppState {
    /// Document store behind every endpoint
    pub store: SharedStore,
}

#[cfg(feature = "ssr")]
impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[cfg(feature = "ssr")]
impl FromRef<AppState> for SharedStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
