//! Domain Models - The vocabulary of the kennel
//!
//! Every record is immutable by replacement: a change is a new value stored
//! under the same identifier.

pub mod dog;
pub mod entity;
pub mod program;
pub mod session;
