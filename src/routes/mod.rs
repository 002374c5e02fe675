//! Route Configuration Module
//!
//! ```text
//! routes/
//! ├── mod.rs            - Module exports
//! ├── router.rs         - Router assembly and cross-cutting layers
//! ├── auth_routes.rs    - /auth route group
//! └── content_routes.rs - /v1 route group (wiki, clips, messages)
//! ```

/// Router assembly and cross-cutting layers
pub mod router;

/// /auth route group
pub mod auth_routes;

/// /v1 route group
pub mod content_routes;

pub use router::create_router;
