//! Group Data Structure
//!
//! A group holds two independent membership sets: `users` and `members`.
//! The hosted store may omit either field, so the wire shape
//! ([`GroupDocument`]) keeps them optional while the client shape ([`Group`])
//! always materializes them as sequences.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::error::SharedError;

/// Which membership set of a group an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipField {
    /// The `users` set (add member / delete user endpoints)
    Users,
    /// The `members` set (add permission / delete member endpoints)
    Members,
}

impl MembershipField {
    /// Field name as it appears in stored documents
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Members => "members",
        }
    }
}

/// A group document as stored and served by the gateway
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupDocument {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<String>>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl GroupDocument {
    /// Create an empty document with both sets present
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            users: Some(Vec::new()),
            members: Some(Vec::new()),
            created: None,
        }
    }

    /// Mutable access to one membership set, creating it if absent
    pub fn field_mut(&mut self, field: MembershipField) -> &mut Vec<String> {
        match field {
            MembershipField::Users => self.users.get_or_insert_with(Vec::new),
            MembershipField::Members => self.members.get_or_insert_with(Vec::new),
        }
    }
}

/// A group as held by the client view
///
/// `users` and `members` are never absent; [`Group::from_value`] normalizes
/// missing or non-array values to an empty sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub users: Vec<String>,
    pub members: Vec<String>,
    /// Creation timestamp as an ISO 8601 string, if known
    pub created: Option<String>,
}

impl Group {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            users: Vec::new(),
            members: Vec::new(),
            created: None,
        }
    }

    pub fn with_users(mut self, users: &[&str]) -> Self {
        self.users = users.iter().map(|u| u.to_string()).collect();
        self
    }

    pub fn with_members(mut self, members: &[&str]) -> Self {
        self.members = members.iter().map(|m| m.to_string()).collect();
        self
    }

    /// Parse one untyped group object received over the network
    ///
    /// `id` and `name` must be strings. `users`/`members` keep only their
    /// string entries and fall back to empty when missing or not arrays.
    /// `created` accepts an ISO string or a `{seconds, nanoseconds}` timestamp
    /// object; anything else is treated as unknown.
    pub fn from_value(value: &Value) -> Result<Self, SharedError> {
        let object = value
            .as_object()
            .ok_or_else(|| SharedError::validation("group", "expected a JSON object"))?;

        let id = object
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| SharedError::validation("id", "missing or not a string"))?;
        let name = object
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| SharedError::validation("name", "missing or not a string"))?;

        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            users: string_set(object.get("users")),
            members: string_set(object.get("members")),
            created: created_timestamp(object.get("created")),
        })
    }

    pub fn field(&self, field: MembershipField) -> &[String] {
        match field {
            MembershipField::Users => &self.users,
            MembershipField::Members => &self.members,
        }
    }

    pub fn field_mut(&mut self, field: MembershipField) -> &mut Vec<String> {
        match field {
            MembershipField::Users => &mut self.users,
            MembershipField::Members => &mut self.members,
        }
    }

    /// Insert `value` into a set, returning false if it was already present
    pub fn insert(&mut self, field: MembershipField, value: &str) -> bool {
        let set = self.field_mut(field);
        if set.iter().any(|v| v == value) {
            return false;
        }
        set.push(value.to_string());
        true
    }

    /// Remove every occurrence of `value` from a set, returning whether anything changed
    pub fn remove(&mut self, field: MembershipField, value: &str) -> bool {
        let set = self.field_mut(field);
        let before = set.len();
        set.retain(|v| v != value);
        set.len() != before
    }

    /// Case-insensitive substring match of `term` against the group name
    pub fn matches(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }
}

impl From<GroupDocument> for Group {
    fn from(doc: GroupDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            users: doc.users.unwrap_or_default(),
            members: doc.members.unwrap_or_default(),
            created: doc.created.map(|c| c.to_rfc3339()),
        }
    }
}

/// Parse the group list payload returned by the gateway
pub fn parse_groups(value: &Value) -> Result<Vec<Group>, SharedError> {
    let items = value
        .as_array()
        .ok_or_else(|| SharedError::validation("groups", "expected a JSON array"))?;
    items.iter().map(Group::from_value).collect()
}

fn string_set(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

fn created_timestamp(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Object(ts) => {
            let seconds = ts
                .get("seconds")
                .or_else(|| ts.get("_seconds"))
                .and_then(Value::as_i64)?;
            let nanos = ts
                .get("nanoseconds")
                .or_else(|| ts.get("_nanoseconds"))
                .and_then(Value::as_u64)
                .unwrap_or(0);
            let nanos = u32::try_from(nanos).unwrap_or(0);
            Utc.timestamp_opt(seconds, nanos)
                .single()
                .map(|dt| dt.to_rfc3339())
        }
        _ => None,
    }
}
