//! Authentication Module
//!
//! Token-based authentication: registration, login, bearer token
//! issuance, validation, and revocation.
//!
//! # Architecture
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports
//! ├── users.rs    - User model and store operations
//! ├── tokens.rs   - Token codec and token store operations
//! ├── core.rs     - Orchestration (register/login/validate/revoke)
//! └── handlers/   - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: credentials in -> user row created -> token issued
//!    through the login path
//! 2. **Login**: credentials verified -> fresh token issued (a user may
//!    hold several valid tokens at once)
//! 3. **Validate**: digest lookup joins the token to its user
//! 4. **Revoke**: the digest row is deleted; the token is dead
//!
//! # Security
//!
//! - Passwords stored as salted bcrypt digests
//! - Tokens stored only as SHA-256 digests; the raw value leaves the
//!   process exactly once
//! - Credential failures are indistinguishable between unknown username
//!   and wrong password

/// User model and store operations
pub mod users;

/// Token codec and token store operations
pub mod tokens;

/// Registration, login, validation, and revocation
pub mod core;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
pub use handlers::{login, logout, me, register};
