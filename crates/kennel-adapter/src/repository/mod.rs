//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from kennel-domain.

pub mod in_memory;
