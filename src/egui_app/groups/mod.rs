//! Group Admin Module
//!
//! - **`api`** - Blocking HTTP client for the group gateway
//! - **`state`** - View controller: lists, search, popups, pending calls
//! - **`view`** - egui rendering

pub mod api;
pub mod state;
pub mod view;

pub use api::{ClientError, GroupApi, HttpGroupApi};
pub use state::{
    filter_groups, GroupListState, InputKind, LoadStatus, Mutation, MutationOp, PendingIntent,
    ViewCapabilities,
};
