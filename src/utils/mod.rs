//! Utility functions shared across the application.
//!
//! - [`base62`] - identifier-to-code encoding

pub mod base62;
