//! # Kennel Shared
//!
//! Configuration and the application-level error type used across the
//! kennel crates.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
