//! The document store the gateway proxies to.

use std::sync::Arc;

use thiserror::Error;

use crate::shared::groups::{GroupDocument, MembershipField, Post};

/// Collection holding one document per group
pub const GROUPS_COLLECTION: &str = "groups";

/// Errors raised by a store backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// The targeted document does not exist
    #[error("No document to update: {collection}/{id}")]
    NotFound { collection: &'static str, id: String },

    /// A request field the operation needs was not supplied
    #[error("Missing value for required field '{0}'")]
    MissingField(&'static str),

    /// The backend itself failed (connection, query, decode)
    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            collection: GROUPS_COLLECTION,
            id: id.into(),
        }
    }
}

#[cfg(feature = "ssr")]
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        Self::Backend(err.to_string())
    }
}

/// Storage operations behind the group endpoints.
///
/// Every method is one store operation. `array_union` and `array_remove`
/// are atomic per document and idempotent: adding a present value or removing
/// an absent one leaves the document unchanged and still succeeds.
#[async_trait::async_trait]
pub trait GroupStore: Send + Sync {
    /// Read every group document.
    async fn list_groups(&self) -> Result<Vec<GroupDocument>, StoreError>;

    /// Add `value` to a membership set of group `group_id` if not already present.
    async fn array_union(
        &self,
        group_id: &str,
        field: MembershipField,
        value: &str,
    ) -> Result<(), StoreError>;

    /// Remove `value` from a membership set of group `group_id`.
    async fn array_remove(
        &self,
        group_id: &str,
        field: MembershipField,
        value: &str,
    ) -> Result<(), StoreError>;

    /// Read the posts associated with `member`.
    async fn posts_by_member(&self, member: &str) -> Result<Vec<Post>, StoreError>;
}

/// Handle shared by all request handlers
pub type SharedStore = Arc<dyn GroupStore>;
