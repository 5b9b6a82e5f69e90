//! Domain layer: the code-generation and counting engine.
//!
//! - [`allocator`] - monotonic identifier source
//! - [`entities`] - stored link records
//! - [`registry`] - concurrent code-to-URL and code-to-counter store
//!
//! The engine is transport-agnostic. Handlers in [`crate::api`] call into
//! [`registry::CodeRegistry`] and translate its `Option` results into HTTP
//! responses; nothing in this module knows about status codes or routes.
//!
//! # Concurrency contract
//!
//! Operations on the same code are linearizable with respect to each other:
//! a create strictly precedes any resolve or access record that observes its
//! code, and increments are atomic, so none are lost under contention.
//! Operations on different codes are unordered and never block one another.

pub mod allocator;
pub mod entities;
pub mod registry;

pub use allocator::IdentifierAllocator;
pub use entities::LinkRecord;
pub use registry::CodeRegistry;
