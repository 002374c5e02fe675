//! Request Middleware
//!
//! ```text
//! middleware/
//! ├── mod.rs     - Module exports
//! ├── auth.rs    - Bearer token extraction and require_auth layer
//! └── api_key.rs - Static key guard for ingest endpoints
//! ```

/// Bearer token extraction and require_auth layer
pub mod auth;

/// Static key guard for ingest endpoints
pub mod api_key;

pub use api_key::require_static_key;
pub use auth::{extract_bearer_token, require_auth, AuthUser, AuthenticatedUser};
