//! Backend Module
//!
//! This module contains the server side of groupdesk: a small Axum gateway
//! whose endpoints each translate one JSON request into one document-store
//! operation.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`groups`** - Group store abstraction and endpoint handlers
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── groups/         - Store and handlers
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` carries an `Arc<dyn GroupStore>`. Handlers hold nothing across
//! requests; the store is the only persistent state. The PostgreSQL pool is a
//! process-wide singleton created on first use.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; `BackendError` converts into a
//! status code plus the `{error, details}` JSON envelope.

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// Group gateway: store and handlers
#[cfg(feature = "ssr")]
pub mod groups;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

#[cfg(feature = "ssr")]
pub use server::{create_app, create_app_with_store, ServerConfig};
#[cfg(feature = "ssr")]
pub use groups::{GroupStore, MemoryStore, PostgresStore, SharedStore, StoreError};
#[cfg(feature = "ssr")]
pub use error::BackendError;
