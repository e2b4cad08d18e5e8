//! In-memory group store
//!
//! Used when no `DATABASE_URL` is configured and by the test suite. Each
//! operation holds the write lock for its whole duration, which gives the same
//! per-document atomicity as the database backend.

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use super::store::{GroupStore, StoreError};
use crate::shared::groups::{GroupDocument, MembershipField, Post};

#[derive(Default)]
pub struct MemoryStore {
    groups: RwLock<BTreeMap<String, GroupDocument>>,
    posts: RwLock<Vec<(String, Post)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `groups`
    pub fn with_groups(groups: impl IntoIterator<Item = GroupDocument>) -> Self {
        let groups = groups
            .into_iter()
            .map(|g| (g.id.clone(), g))
            .collect::<BTreeMap<_, _>>();
        Self {
            groups: RwLock::new(groups),
            posts: RwLock::new(Vec::new()),
        }
    }

    pub async fn insert_group(&self, group: GroupDocument) {
        self.groups.write().await.insert(group.id.clone(), group);
    }

    pub async fn insert_post(&self, member: impl Into<String>, post: Post) {
        self.posts.write().await.push((member.into(), post));
    }

    pub async fn group(&self, id: &str) -> Option<GroupDocument> {
        self.groups.read().await.get(id).cloned()
    }
}

#[async_trait::async_trait]
impl GroupStore for MemoryStore {
    async fn list_groups(&self) -> Result<Vec<GroupDocument>, StoreError> {
        Ok(self.groups.read().await.values().cloned().collect())
    }

    async fn array_union(
        &self,
        group_id: &str,
        field: MembershipField,
        value: &str,
    ) -> Result<(), StoreError> {
        let mut groups = self.groups.write().await;
        let doc = groups
            .get_mut(group_id)
            .ok_or_else(|| StoreError::not_found(group_id))?;
        let set = doc.field_mut(field);
        if !set.iter().any(|v| v == value) {
            set.push(value.to_string());
        }
        Ok(())
    }

    async fn array_remove(
        &self,
        group_id: &str,
        field: MembershipField,
        value: &str,
    ) -> Result<(), StoreError> {
        let mut groups = self.groups.write().await;
        let doc = groups
            .get_mut(group_id)
            .ok_or_else(|| StoreError::not_found(group_id))?;
        doc.field_mut(field).retain(|v| v != value);
        Ok(())
    }

    async fn posts_by_member(&self, member: &str) -> Result<Vec<Post>, StoreError> {
        Ok(self
            .posts
            .read()
            .await
            .iter()
            .filter(|(owner, _)| owner == member)
            .map(|(_, post)| post.clone())
            .collect())
    }
}
