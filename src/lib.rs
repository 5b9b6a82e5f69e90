//! # Snaplink
//!
//! An in-memory URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! The crate separates the concurrency-sensitive engine from the transport
//! plumbing:
//!
//! - **Domain Layer** ([`domain`]) - The code-generation and counting engine:
//!   a monotonic identifier allocator, base-62 encoding, and the concurrent
//!   [`domain::registry::CodeRegistry`] holding URL records and access
//!   counters
//! - **API Layer** ([`api`]) - Axum handlers, DTOs, and middleware
//!   translating engine results into HTTP responses
//!
//! ## Features
//!
//! - Collision-free short codes: strictly increasing identifiers encoded in
//!   base-62 (no retry loops, no randomness)
//! - Lock-free access counting: per-code `AtomicU64` counters behind a
//!   lock-striped map, so concurrent redirects never lose clicks
//! - Read-only statistics: a stats query never counts as an access
//!
//! ## Quick Start
//!
//! ```bash
//! # All variables are optional
//! export LISTEN="0.0.0.0:3000"
//! export BASE_URL="https://s.example.com"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;
pub mod utils;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::{CodeRegistry, IdentifierAllocator, LinkRecord};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
