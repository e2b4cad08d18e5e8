//! Group Gateway Module
//!
//! Single-purpose endpoints that proxy group reads and membership writes to
//! the document store.
//!
//! # Module Structure
//!
//! ```text
//! groups/
//! ├── mod.rs       - Module exports
//! ├── store.rs     - GroupStore trait and StoreError
//! ├── memory.rs    - In-memory store (development and tests)
//! ├── postgres.rs  - PostgreSQL store
//! └── handlers.rs  - axum handlers
//! ```
//!
//! # Endpoints
//!
//! - `GET  /api/datatwo/datatwo` - list groups
//! - `POST /api/addmember/addmember` - add to `users`
//! - `POST /api/permcloud/permcloud` - add to `members`
//! - `POST /api/deletemember/deletemember` - remove from `users`
//! - `POST /api/deletemember2/deletemember2` - remove from `members`
//! - `GET  /api/getmemberposts/getmemberposts?member=` - posts for a member

pub mod store;
pub mod memory;
pub mod postgres;
pub mod handlers;

pub use store::{GroupStore, SharedStore, StoreError};
pub use memory::MemoryStore;
pub use postgres::PostgresStore;
