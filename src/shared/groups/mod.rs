//! Groups Module
//!
//! Data structures shared by the group gateway and the group list view:
//!
//! - `Group` / `GroupDocument` - a group and its stored shape
//! - `Post` - a post looked up by member
//! - request/response envelopes and endpoint paths
//!
//! # Usage
//!
//! ```rust
//! use groupdesk::shared::groups::{Group, MembershipField};
//!
//! let mut group = Group::new("g1", "Eng");
//! group.insert(MembershipField::Users, "alice");
//! ```

pub mod group;
pub mod post;
pub mod requests;

pub use group::{parse_groups, Group, GroupDocument, MembershipField};
pub use post::{parse_posts, Post};
pub use requests::{
    paths, AddMemberRequest, DeleteUserRequest, ErrorResponse, MemberPostsQuery, MemberRequest,
    MessageResponse,
};
