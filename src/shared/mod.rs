//! Shared Module
//!
//! Types used by both the gateway and the admin panel: the group and post
//! records, the endpoint request bodies, date formatting and configuration.
//! Everything here is plain serde data with no I/O.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Group and post records, request and response bodies
pub mod groups;

/// Display formatting
pub mod format;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use groups::{Group, GroupDocument, MembershipField, Post};
pub use format::format_date;
