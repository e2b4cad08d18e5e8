//! Group API Client
//!
//! Blocking calls against the group gateway. The view never calls these on
//! the UI thread; `GroupListState` runs them on worker threads.

use reqwest::blocking::{Client, Response};
use serde::Serialize;
use thiserror::Error;

use crate::egui_app::config::Config;
use crate::shared::groups::{
    parse_groups, parse_posts, paths, AddMemberRequest, DeleteUserRequest, ErrorResponse, Group,
    MemberRequest, MessageResponse, Post,
};

/// Client-side failure of one gateway call
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The gateway answered with a non-success status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body did not have the expected shape
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Operations the group list view needs from the gateway
pub trait GroupApi: Send + Sync {
    fn fetch_groups(&self) -> Result<Vec<Group>, ClientError>;

    /// Add `new_member` to the group's `users`; returns the gateway message
    fn add_member(&self, group_id: &str, new_member: &str) -> Result<String, ClientError>;

    /// Add `member` to the group's `members`
    fn add_permission(&self, group_id: &str, member: &str) -> Result<String, ClientError>;

    /// Remove `user` from the group's `users`
    fn delete_user(&self, group_id: &str, user: &str) -> Result<String, ClientError>;

    /// Remove `member` from the group's `members`
    fn delete_member(&self, group_id: &str, member: &str) -> Result<String, ClientError>;

    fn fetch_member_posts(&self, member: &str) -> Result<Vec<Post>, ClientError>;
}

/// `GroupApi` over HTTP
pub struct HttpGroupApi {
    config: Config,
    client: Client,
}

impl HttpGroupApi {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<String, ClientError> {
        let url = self.config.api_url(path);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let response = check_status(response, "Request failed")?;
        let envelope = response
            .json::<MessageResponse>()
            .map_err(|e| ClientError::Parse(e.to_string()))?;
        Ok(envelope.message)
    }

    fn get_value(
        &self,
        path: &str,
        query: &[(&str, &str)],
        failure: &str,
    ) -> Result<serde_json::Value, ClientError> {
        let url = self.config.api_url(path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        check_status(response, failure)?
            .json::<serde_json::Value>()
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

/// Turn a non-success response into `ClientError::Status`
///
/// The gateway's `details` string is preferred; `fallback` is used when the
/// body is not an error envelope.
fn check_status(response: Response, fallback: &str) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .ok()
        .and_then(|body| body.details.or(Some(body.error)))
        .unwrap_or_else(|| format!("{}: {}", fallback, status));

    tracing::warn!("Gateway returned {}: {}", status, message);
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

impl GroupApi for HttpGroupApi {
    fn fetch_groups(&self) -> Result<Vec<Group>, ClientError> {
        let value = self.get_value(paths::LIST_GROUPS, &[], "Failed to fetch groups")?;
        parse_groups(&value).map_err(|e| ClientError::Parse(e.to_string()))
    }

    fn add_member(&self, group_id: &str, new_member: &str) -> Result<String, ClientError> {
        self.post_json(paths::ADD_MEMBER, &AddMemberRequest::new(group_id, new_member))
    }

    fn add_permission(&self, group_id: &str, member: &str) -> Result<String, ClientError> {
        self.post_json(paths::ADD_PERMISSION, &MemberRequest::new(group_id, member))
    }

    fn delete_user(&self, group_id: &str, user: &str) -> Result<String, ClientError> {
        self.post_json(paths::DELETE_USER, &DeleteUserRequest::new(group_id, user))
    }

    fn delete_member(&self, group_id: &str, member: &str) -> Result<String, ClientError> {
        self.post_json(paths::DELETE_MEMBER, &MemberRequest::new(group_id, member))
    }

    fn fetch_member_posts(&self, member: &str) -> Result<Vec<Post>, ClientError> {
        let value = self.get_value(
            paths::MEMBER_POSTS,
            &[("member", member)],
            "Failed to fetch posts",
        )?;
        parse_posts(&value).map_err(|e| ClientError::Parse(e.to_string()))
    }
}
