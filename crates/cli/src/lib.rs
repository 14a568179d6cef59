//! Kennel CLI - library half of the `kennel` binary

pub mod commands;
pub mod interactive;
pub mod render;
