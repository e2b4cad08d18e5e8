//! Group Gateway HTTP Handlers
//!
//! Each handler maps one request onto exactly one store operation and answers
//! with either the `{message}` envelope or the `{error, details}` envelope.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::store::{SharedStore, StoreError};
use crate::backend::error::BackendError;
use crate::shared::groups::{
    AddMemberRequest, DeleteUserRequest, GroupDocument, MemberPostsQuery, MemberRequest,
    MembershipField, MessageResponse, Post,
};

/// Pull a request field the store operation needs.
fn required(value: Option<String>, field: &'static str) -> Result<String, StoreError> {
    value.ok_or(StoreError::MissingField(field))
}

/// Unwrap a JSON body, logging a rejected one.
///
/// A body that is not the endpoint's JSON shape is a handler failure like any
/// other, reported through the `{error, details}` envelope.
fn read_body<T>(
    body: Result<Json<T>, JsonRejection>,
    context: &'static str,
) -> Result<T, BackendError> {
    body.map(|Json(body)| body).map_err(|rejection| {
        tracing::error!("Error {}: {}", context, rejection.body_text());
        BackendError::from(rejection)
    })
}

fn log_failure(context: &'static str) -> impl FnOnce(StoreError) -> StoreError {
    move |err| {
        tracing::error!("Error {}: {}", context, err);
        err
    }
}

/// `GET /api/datatwo/datatwo` - all groups
pub async fn list_groups(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<GroupDocument>>, BackendError> {
    let groups = store
        .list_groups()
        .await
        .map_err(log_failure("fetching groups"))?;
    tracing::debug!("Returning {} groups", groups.len());
    Ok(Json(groups))
}

/// `POST /api/addmember/addmember` - union `newMember` into `users`
pub async fn add_member(
    State(store): State<SharedStore>,
    body: Result<Json<AddMemberRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, BackendError> {
    let body = read_body(body, "adding member")?;
    let result: Result<(), StoreError> = async {
        let group_id = required(body.group_id, "groupId")?;
        let new_member = required(body.new_member, "newMember")?;
        tracing::debug!("Adding user {} to group {}", new_member, group_id);
        store
            .array_union(&group_id, MembershipField::Users, &new_member)
            .await
    }
    .await;

    result.map_err(log_failure("adding member"))?;
    Ok(Json(MessageResponse::new("Member added successfully")))
}

/// `POST /api/permcloud/permcloud` - union `member` into `members`
pub async fn add_permission(
    State(store): State<SharedStore>,
    body: Result<Json<MemberRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, BackendError> {
    let body = read_body(body, "adding permission")?;
    let result: Result<(), StoreError> = async {
        let group_id = required(body.group_id, "groupId")?;
        let member = required(body.member, "member")?;
        tracing::debug!("Granting member {} on group {}", member, group_id);
        store
            .array_union(&group_id, MembershipField::Members, &member)
            .await
    }
    .await;

    result.map_err(log_failure("adding permission"))?;
    Ok(Json(MessageResponse::new("Permission added successfully")))
}

/// `POST /api/deletemember/deletemember` - remove `user` from `users`
pub async fn delete_user(
    State(store): State<SharedStore>,
    body: Result<Json<DeleteUserRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, BackendError> {
    let body = read_body(body, "deleting user")?;
    let result: Result<(), StoreError> = async {
        let group_id = required(body.group_id, "groupId")?;
        let user = required(body.user, "user")?;
        tracing::debug!("Removing user {} from group {}", user, group_id);
        store
            .array_remove(&group_id, MembershipField::Users, &user)
            .await
    }
    .await;

    result.map_err(log_failure("deleting user"))?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

/// `POST /api/deletemember2/deletemember2` - remove `member` from `members`
pub async fn delete_member(
    State(store): State<SharedStore>,
    body: Result<Json<MemberRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, BackendError> {
    let body = read_body(body, "deleting member")?;
    let result: Result<(), StoreError> = async {
        let group_id = required(body.group_id, "groupId")?;
        let member = required(body.member, "member")?;
        tracing::debug!("Removing member {} from group {}", member, group_id);
        store
            .array_remove(&group_id, MembershipField::Members, &member)
            .await
    }
    .await;

    result.map_err(log_failure("deleting member"))?;
    Ok(Json(MessageResponse::new("Member deleted successfully")))
}

/// `GET /api/getmemberposts/getmemberposts?member=<id>`
pub async fn member_posts(
    State(store): State<SharedStore>,
    Query(query): Query<MemberPostsQuery>,
) -> Result<Json<Vec<Post>>, BackendError> {
    let result: Result<Vec<Post>, StoreError> = async {
        let member = required(query.member, "member")?;
        store.posts_by_member(&member).await
    }
    .await;

    let posts = result.map_err(log_failure("fetching member posts"))?;
    Ok(Json(posts))
}

/// Any method other than the one a route accepts
pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
