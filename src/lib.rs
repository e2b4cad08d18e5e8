//! groupdesk - Group Admin Panel
//!
//! groupdesk is a small administration tool for groups stored in a document
//! database. A gateway exposes one HTTP endpoint per store operation, and a
//! native desktop panel lists groups and edits their membership.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between the gateway and the panel
//!   - Group and post records, tolerant of sparse documents
//!   - Request and response bodies, endpoint paths
//!   - Date formatting, error types, configuration
//!
//! - **`backend`** - The gateway (only compiled with `ssr` feature)
//!   - Axum router, one handler per endpoint
//!   - `GroupStore` trait with PostgreSQL and in-memory implementations
//!
//! - **`egui_app`** - Native desktop panel (egui/eframe)
//!   - Group list with search
//!   - Add and remove users and members, view a member's posts
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend module (Axum, sqlx, dotenv)
//!
//! # Usage
//!
//! ```rust,no_run
//! # #[cfg(feature = "ssr")]
//! # async fn example() {
//! use groupdesk::backend::{create_app, ServerConfig};
//!
//! let app = create_app(ServerConfig::default()).await;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//! axum::serve(listener, app).await.unwrap();
//! # }
//! ```
//!
//! # Consistency
//!
//! The panel applies a write to its local lists only after the gateway has
//! confirmed it. It never refetches after a write; the authoritative list
//! and the filtered list are patched in place by group id.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
