//! HTTP handlers for authentication endpoints
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── types.rs    - Request/response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── logout.rs   - Token revocation handler
//! └── me.rs       - Current user handler
//! ```

/// Request/response types
pub mod types;

/// User registration handler
pub mod register;

/// User authentication handler
pub mod login;

/// Token revocation handler
pub mod logout;

/// Current user handler
pub mod me;

pub use login::login;
pub use logout::logout;
pub use me::me;
pub use register::register;
