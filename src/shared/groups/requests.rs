//! Gateway request and response bodies
//!
//! Request fields are optional on the server side: the gateway does not
//! schema-validate bodies, so a missing field only surfaces once the store
//! operation is attempted.

use serde::{Deserialize, Serialize};

/// Endpoint paths served by the gateway
pub mod paths {
    pub const LIST_GROUPS: &str = "/api/datatwo/datatwo";
    pub const ADD_MEMBER: &str = "/api/addmember/addmember";
    pub const ADD_PERMISSION: &str = "/api/permcloud/permcloud";
    pub const DELETE_USER: &str = "/api/deletemember/deletemember";
    pub const DELETE_MEMBER: &str = "/api/deletemember2/deletemember2";
    pub const MEMBER_POSTS: &str = "/api/getmemberposts/getmemberposts";
}

/// `POST /api/addmember/addmember`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberRequest {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub new_member: Option<String>,
}

impl AddMemberRequest {
    pub fn new(group_id: impl Into<String>, new_member: impl Into<String>) -> Self {
        Self {
            group_id: Some(group_id.into()),
            new_member: Some(new_member.into()),
        }
    }
}

/// `POST /api/permcloud/permcloud` and `POST /api/deletemember2/deletemember2`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberRequest {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub member: Option<String>,
}

impl MemberRequest {
    pub fn new(group_id: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            group_id: Some(group_id.into()),
            member: Some(member.into()),
        }
    }
}

/// `POST /api/deletemember/deletemember`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserRequest {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
}

impl DeleteUserRequest {
    pub fn new(group_id: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            group_id: Some(group_id.into()),
            user: Some(user.into()),
        }
    }
}

/// Query string of `GET /api/getmemberposts/getmemberposts`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberPostsQuery {
    #[serde(default)]
    pub member: Option<String>,
}

/// Success envelope for write endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure envelope for every endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default)]
    pub details: Option<String>,
}
