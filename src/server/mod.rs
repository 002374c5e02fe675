//! Server Module
//!
//! Initialization and configuration of the HTTP server.
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Environment configuration and store loading
//! ├── state.rs  - AppState and FromRef implementations
//! ├── notify.rs - Fire-and-forget ingest webhooks
//! └── init.rs   - Application assembly
//! ```

/// Environment configuration and store loading
pub mod config;

/// AppState and FromRef implementations
pub mod state;

/// Fire-and-forget ingest webhooks
pub mod notify;

/// Application assembly
pub mod init;

pub use config::Config;
pub use init::create_app;
pub use state::AppState;
