//! Group List State
//!
//! This module holds the state behind the group list view and the logic that
//! keeps it consistent with the gateway.
//!
//! # Two lists
//!
//! `groups` is the authoritative snapshot; `filtered_groups` is the projection
//! matching `search_query`. Every confirmed write is applied to both, matched
//! by group id, so the filtered view never drifts from the snapshot.
//!
//! # Remote calls
//!
//! Calls run on worker threads and report back over `mpsc` channels.
//! `check_pending_operations` is polled once per frame and applies whatever
//! has arrived. Local state only changes after the gateway confirms a write.

use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;

use super::api::{ClientError, GroupApi};
use crate::shared::groups::{Group, MembershipField, Post};

pub type LoadGroupsResult = Result<Vec<Group>, ClientError>;
pub type WriteResult = Result<String, ClientError>;
pub type LoadPostsResult = Result<Vec<Post>, ClientError>;

/// Which actions the view offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCapabilities {
    pub add_member: bool,
    pub add_permission: bool,
    pub delete_user: bool,
    pub delete_member: bool,
    pub member_posts: bool,
}

impl ViewCapabilities {
    /// List, search and a local-only input popup
    pub fn basic() -> Self {
        Self {
            add_member: false,
            add_permission: false,
            delete_user: false,
            delete_member: false,
            member_posts: false,
        }
    }

    /// Adds user management
    pub fn members() -> Self {
        Self {
            add_member: true,
            delete_user: true,
            ..Self::basic()
        }
    }

    /// Every action, including permissions and member posts
    pub fn full() -> Self {
        Self {
            add_member: true,
            add_permission: true,
            delete_user: true,
            delete_member: true,
            member_posts: true,
        }
    }

    fn allows_input(&self, kind: InputKind) -> bool {
        match kind {
            InputKind::Note => true,
            InputKind::AddMember => self.add_member,
            InputKind::AddPermission => self.add_permission,
        }
    }

    fn allows_delete(&self, field: MembershipField) -> bool {
        match field {
            MembershipField::Users => self.delete_user,
            MembershipField::Members => self.delete_member,
        }
    }
}

impl Default for ViewCapabilities {
    fn default() -> Self {
        Self::full()
    }
}

/// What the input popup is collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Free text, acknowledged locally
    Note,
    /// A user id for the `users` set
    AddMember,
    /// A member id for the `members` set
    AddPermission,
}

impl InputKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Note => "Input for",
            Self::AddMember => "Add member to",
            Self::AddPermission => "Add permission to",
        }
    }
}

/// The single editing slot: an open popup or a staged deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingIntent {
    Input {
        group_id: String,
        group_name: String,
        kind: InputKind,
    },
    ConfirmDelete {
        group_id: String,
        field: MembershipField,
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOp {
    Add,
    Remove,
}

/// One membership write, sent to the gateway and mirrored locally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub group_id: String,
    pub field: MembershipField,
    pub op: MutationOp,
    pub value: String,
}

impl Mutation {
    fn send(&self, api: &dyn GroupApi) -> WriteResult {
        match (self.field, self.op) {
            (MembershipField::Users, MutationOp::Add) => api.add_member(&self.group_id, &self.value),
            (MembershipField::Members, MutationOp::Add) => {
                api.add_permission(&self.group_id, &self.value)
            }
            (MembershipField::Users, MutationOp::Remove) => {
                api.delete_user(&self.group_id, &self.value)
            }
            (MembershipField::Members, MutationOp::Remove) => {
                api.delete_member(&self.group_id, &self.value)
            }
        }
    }

    fn apply_to(&self, group: &mut Group) {
        match self.op {
            MutationOp::Add => {
                group.insert(self.field, &self.value);
            }
            MutationOp::Remove => {
                group.remove(self.field, &self.value);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    NotStarted,
    Loading,
    Loaded,
    Failed,
}

/// Groups whose name contains `term`, ignoring case
pub fn filter_groups(groups: &[Group], term: &str) -> Vec<Group> {
    groups.iter().filter(|g| g.matches(term)).cloned().collect()
}

fn spawn_call<T, F>(api: &Arc<dyn GroupApi>, call: F) -> Receiver<T>
where
    T: Send + 'static,
    F: FnOnce(&dyn GroupApi) -> T + Send + 'static,
{
    let api = Arc::clone(api);
    let (tx, rx) = channel();
    std::thread::spawn(move || {
        // The receiver is gone if the view was dropped; nothing to report to.
        let _ = tx.send(call(api.as_ref()));
    });
    rx
}

fn worker_gone() -> ClientError {
    ClientError::Network("request worker stopped before answering".to_string())
}

/// The main state for the group list view
pub struct GroupListState {
    api: Arc<dyn GroupApi>,
    pub capabilities: ViewCapabilities,

    /// Authoritative snapshot
    pub groups: Vec<Group>,
    /// `groups` filtered by `search_query`
    pub filtered_groups: Vec<Group>,
    pub search_query: String,

    pub load_status: LoadStatus,
    /// Last error; each new failure replaces it
    pub error: Option<String>,
    pub success_message: Option<String>,

    pub intent: Option<PendingIntent>,
    pub input_value: String,

    pub selected_member: Option<String>,
    /// Posts per member id, overwritten on every reload
    pub member_posts: HashMap<String, Vec<Post>>,

    pending_load: Option<Receiver<LoadGroupsResult>>,
    pending_writes: Vec<(Mutation, Receiver<WriteResult>)>,
    pending_posts: Vec<(String, Receiver<LoadPostsResult>)>,
}

impl GroupListState {
    pub fn new(api: Arc<dyn GroupApi>, capabilities: ViewCapabilities) -> Self {
        Self {
            api,
            capabilities,
            groups: Vec::new(),
            filtered_groups: Vec::new(),
            search_query: String::new(),
            load_status: LoadStatus::NotStarted,
            error: None,
            success_message: None,
            intent: None,
            input_value: String::new(),
            selected_member: None,
            member_posts: HashMap::new(),
            pending_load: None,
            pending_writes: Vec::new(),
            pending_posts: Vec::new(),
        }
    }

    /// Fetch the group collection
    pub fn load(&mut self) {
        tracing::info!("Loading groups");
        self.load_status = LoadStatus::Loading;
        self.pending_load = Some(spawn_call(&self.api, |api| api.fetch_groups()));
    }

    /// Update the search term and recompute the filtered list
    pub fn search(&mut self, term: &str) {
        self.search_query = term.to_string();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered_groups = filter_groups(&self.groups, &self.search_query);
    }

    /// Whether any remote call is still outstanding
    pub fn is_busy(&self) -> bool {
        self.pending_load.is_some() || !self.pending_writes.is_empty() || !self.pending_posts.is_empty()
    }

    // ---- input popup -------------------------------------------------------

    /// Open the input popup for `group`
    pub fn open_input(&mut self, group: &Group, kind: InputKind) {
        if !self.capabilities.allows_input(kind) {
            tracing::debug!("Input {:?} not offered by this view", kind);
            return;
        }
        self.intent = Some(PendingIntent::Input {
            group_id: group.id.clone(),
            group_name: group.name.clone(),
            kind,
        });
        self.input_value.clear();
    }

    pub fn open_add_member(&mut self, group: &Group) {
        self.open_input(group, InputKind::AddMember);
    }

    pub fn open_add_permission(&mut self, group: &Group) {
        self.open_input(group, InputKind::AddPermission);
    }

    /// Close whatever the editing slot holds
    pub fn cancel(&mut self) {
        self.intent = None;
        self.input_value.clear();
    }

    /// Confirm the open input popup
    ///
    /// A note is acknowledged locally. Member and permission inputs are sent
    /// to the gateway; the popup closes once the write is confirmed.
    pub fn confirm_input(&mut self) {
        let Some(PendingIntent::Input { group_id, group_name, kind }) = self.intent.clone() else {
            return;
        };
        let value = self.input_value.trim().to_string();

        let field = match kind {
            InputKind::Note => {
                self.success_message =
                    Some(format!("Success! Input for group {}: {}", group_name, value));
                self.cancel();
                return;
            }
            InputKind::AddMember => MembershipField::Users,
            InputKind::AddPermission => MembershipField::Members,
        };

        if value.is_empty() {
            return;
        }

        self.dispatch(Mutation {
            group_id,
            field,
            op: MutationOp::Add,
            value,
        });
    }

    // ---- deletion ----------------------------------------------------------

    /// Stage `user` of `group_id` for removal; nothing is sent until confirmed
    pub fn request_delete_user(&mut self, group_id: &str, user: &str) {
        self.stage_delete(group_id, MembershipField::Users, user);
    }

    /// Stage `member` of `group_id` for removal
    pub fn request_delete_member(&mut self, group_id: &str, member: &str) {
        self.stage_delete(group_id, MembershipField::Members, member);
    }

    fn stage_delete(&mut self, group_id: &str, field: MembershipField, value: &str) {
        if !self.capabilities.allows_delete(field) {
            tracing::debug!("Deleting from {} not offered by this view", field.as_str());
            return;
        }
        self.intent = Some(PendingIntent::ConfirmDelete {
            group_id: group_id.to_string(),
            field,
            value: value.to_string(),
        });
    }

    /// Send the staged deletion
    pub fn confirm_delete(&mut self) {
        let Some(PendingIntent::ConfirmDelete { group_id, field, value }) = self.intent.clone()
        else {
            return;
        };
        self.intent = None;
        self.dispatch(Mutation {
            group_id,
            field,
            op: MutationOp::Remove,
            value,
        });
    }

    // ---- posts -------------------------------------------------------------

    /// Select a member and fetch their posts
    pub fn select_member(&mut self, member: &str) {
        self.selected_member = Some(member.to_string());
        if self.capabilities.member_posts {
            self.load_posts_for(member);
        }
    }

    pub fn load_posts_for(&mut self, member: &str) {
        let owned = member.to_string();
        let rx = spawn_call(&self.api, move |api| api.fetch_member_posts(&owned));
        self.pending_posts.push((member.to_string(), rx));
    }

    pub fn selected_posts(&self) -> Option<&Vec<Post>> {
        self.selected_member
            .as_ref()
            .and_then(|m| self.member_posts.get(m))
    }

    // ---- results -----------------------------------------------------------

    fn dispatch(&mut self, mutation: Mutation) {
        tracing::info!(
            "Sending {:?} {} for group {} ({})",
            mutation.op,
            mutation.value,
            mutation.group_id,
            mutation.field.as_str()
        );
        let to_send = mutation.clone();
        let rx = spawn_call(&self.api, move |api| to_send.send(api));
        self.pending_writes.push((mutation, rx));
    }

    /// Apply the outcome of the initial load
    pub fn apply_loaded(&mut self, result: LoadGroupsResult) {
        match result {
            Ok(groups) => {
                tracing::info!("Loaded {} groups", groups.len());
                self.groups = groups;
                self.refilter();
                self.load_status = LoadStatus::Loaded;
            }
            Err(e) => {
                tracing::error!("Failed to load groups: {}", e);
                self.error = Some(e.to_string());
                self.load_status = LoadStatus::Failed;
            }
        }
    }

    /// Apply the outcome of a membership write
    ///
    /// On success the mutation is mirrored into both lists. A group id that
    /// matches nothing leaves both lists untouched.
    pub fn apply_write(&mut self, mutation: &Mutation, result: WriteResult) {
        match result {
            Ok(message) => {
                for list in [&mut self.groups, &mut self.filtered_groups] {
                    if let Some(group) = list.iter_mut().find(|g| g.id == mutation.group_id) {
                        mutation.apply_to(group);
                    }
                }
                self.success_message = Some(message);

                let popup_for_group = matches!(
                    &self.intent,
                    Some(PendingIntent::Input { group_id, .. }) if *group_id == mutation.group_id
                );
                if mutation.op == MutationOp::Add && popup_for_group {
                    self.cancel();
                }
            }
            Err(e) => {
                tracing::error!("Write to group {} failed: {}", mutation.group_id, e);
                self.error = Some(e.to_string());
            }
        }
    }

    /// Apply the outcome of a posts lookup
    pub fn apply_posts(&mut self, member: &str, result: LoadPostsResult) {
        match result {
            Ok(posts) => {
                self.member_posts.insert(member.to_string(), posts);
            }
            Err(e) => {
                tracing::error!("Failed to load posts for {}: {}", member, e);
                self.error = Some(e.to_string());
            }
        }
    }

    /// Apply every result that has arrived, without blocking
    pub fn check_pending_operations(&mut self) {
        let polled = self.pending_load.as_ref().map(|rx| rx.try_recv());
        match polled {
            Some(Ok(result)) => {
                self.pending_load = None;
                self.apply_loaded(result);
            }
            Some(Err(TryRecvError::Disconnected)) => {
                self.pending_load = None;
                self.apply_loaded(Err(worker_gone()));
            }
            Some(Err(TryRecvError::Empty)) | None => {}
        }

        let mut still_pending = Vec::new();
        for (mutation, rx) in std::mem::take(&mut self.pending_writes) {
            match rx.try_recv() {
                Ok(result) => self.apply_write(&mutation, result),
                Err(TryRecvError::Empty) => still_pending.push((mutation, rx)),
                Err(TryRecvError::Disconnected) => self.apply_write(&mutation, Err(worker_gone())),
            }
        }
        self.pending_writes = still_pending;

        let mut still_pending = Vec::new();
        for (member, rx) in std::mem::take(&mut self.pending_posts) {
            match rx.try_recv() {
                Ok(result) => self.apply_posts(&member, result),
                Err(TryRecvError::Empty) => still_pending.push((member, rx)),
                Err(TryRecvError::Disconnected) => self.apply_posts(&member, Err(worker_gone())),
            }
        }
        self.pending_posts = still_pending;
    }

    /// Block until every outstanding call has answered, applying results in
    /// the order the calls were made
    pub fn wait_for_pending(&mut self) {
        if let Some(rx) = self.pending_load.take() {
            self.apply_loaded(rx.recv().unwrap_or_else(|_| Err(worker_gone())));
        }
        for (mutation, rx) in std::mem::take(&mut self.pending_writes) {
            let result = rx.recv().unwrap_or_else(|_| Err(worker_gone()));
            self.apply_write(&mutation, result);
        }
        for (member, rx) in std::mem::take(&mut self.pending_posts) {
            let result = rx.recv().unwrap_or_else(|_| Err(worker_gone()));
            self.apply_posts(&member, result);
        }
    }
}
