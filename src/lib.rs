//! streamvault - community backend
//!
//! A small backend for a streaming community: token-based
//! authentication plus REST endpoints for a wiki, a clip archive with
//! Twitch Helix metadata, and a chat message archive, all over a single
//! SQLite store.
//!
//! # Module Structure
//!
//! - **`auth`** - registration, login, bearer token issuance,
//!   validation, and revocation
//! - **`middleware`** - bearer extraction, require_auth layer, static
//!   key guard
//! - **`error`** - the error taxonomy and its HTTP conversion
//! - **`wiki`**, **`clips`**, **`messages`** - content modules, each a
//!   thin layer of validation over parameterized queries
//! - **`server`** - configuration, state, and application assembly
//! - **`routes`** - router wiring
//!
//! # Security Model
//!
//! User-facing routes authenticate with opaque bearer tokens stored
//! only as SHA-256 digests. Bot-facing ingest routes authenticate with
//! static shared keys from the environment. Passwords are salted bcrypt
//! hashes.

/// Authentication: users, tokens, core operations, handlers
pub mod auth;

/// Clip archive with Helix metadata fetch
pub mod clips;

/// Error taxonomy and HTTP conversion
pub mod error;

/// Chat message archive
pub mod messages;

/// Request middleware
pub mod middleware;

/// Router wiring
pub mod routes;

/// Configuration, state, and application assembly
pub mod server;

/// Wiki pages
pub mod wiki;

#[cfg(test)]
pub(crate) mod testutil;
