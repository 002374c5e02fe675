//! Chat Message Archive Module
//!
//! Stores chat messages delivered by a logging bot and serves them back
//! by channel and time window.
//!
//! ```text
//! messages/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Message store operations
//! └── handlers.rs - HTTP handlers
//! ```

/// Message store operations
pub mod db;

/// HTTP handlers
pub mod handlers;
