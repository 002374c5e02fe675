//! Error Module
//!
//! This module defines the error taxonomy shared by the auth core and all
//! HTTP handlers, and its conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Propagation Policy
//!
//! Store-driver errors never escape verbatim to the route layer: every
//! `sqlx::Error` is wrapped into [`ApiError::Store`], logged server-side,
//! and rendered as a generic message. All failures serialize to a JSON
//! envelope carrying a stable machine-readable `kind` alongside the
//! human-readable message.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
