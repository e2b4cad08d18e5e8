//! egui Native Desktop App Module
//!
//! This module provides the group admin panel: a native egui/eframe window
//! that lists groups from the gateway and edits their membership.
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Main application entry point
//! ├── config.rs       - Gateway URL configuration
//! ├── groups/         - API client, view state, rendering
//! └── theme/          - Colors and frame builders
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the admin panel:
//! // cargo run --bin groupdesk
//! ```

pub mod config;
pub mod groups;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use groups::{GroupApi, GroupListState, HttpGroupApi, ViewCapabilities};
