//! Route Configuration Module
//!
//! This module configures all HTTP routes for the gateway.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - Group API endpoints
//! ```
//!
//! # Route Organization
//!
//! 1. **API Routes** - Group reads and membership writes
//! 2. **Tracing** - `tower-http` request spans
//! 3. **Fallback Handler** - 404 for unknown paths

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

#[cfg(feature = "ssr")]
pub use router::create_router;
