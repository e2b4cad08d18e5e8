/**
 * API Route Handlers
 *
 * This module wires the group gateway endpoints.
 *
 * # Routes
 *
 * - `GET  /api/datatwo/datatwo` - List groups
 * - `POST /api/addmember/addmember` - Add a user to a group
 * - `POST /api/permcloud/permcloud` - Add a member to a group
 * - `POST /api/deletemember/deletemember` - Remove a user from a group
 * - `POST /api/deletemember2/deletemember2` - Remove a member from a group
 * - `GET  /api/getmemberposts/getmemberposts` - Posts for a member
 *
 * Every other method on these paths answers 405.
 */

use axum::Router;
#[cfg(feature = "ssr")]
use axum::routing::{get, post};
#[cfg(feature = "ssr")]
use crate::backend::server::state::AppState;
#[cfg(feature = "ssr")]
use crate::backend::groups::handlers::{
    add_member, add_permission, delete_member, delete_user, list_groups, member_posts,
    method_not_allowed,
};
#[cfg(feature = "ssr")]
use crate::shared::groups::paths;

/// Configure API routes
#[cfg(feature = "ssr")]
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Reads
        .route(
            paths::LIST_GROUPS,
            get(list_groups).fallback(method_not_allowed),
        )
        .route(
            paths::MEMBER_POSTS,
            get(member_posts).fallback(method_not_allowed),
        )
        // users set
        .route(
            paths::ADD_MEMBER,
            post(add_member).fallback(method_not_allowed),
        )
        .route(
            paths::DELETE_USER,
            post(delete_user).fallback(method_not_allowed),
        )
        // members set
        .route(
            paths::ADD_PERMISSION,
            post(add_permission).fallback(method_not_allowed),
        )
        .route(
            paths::DELETE_MEMBER,
            post(delete_member).fallback(method_not_allowed),
        )
}
